use serde::Deserialize;
use validator::Validate;

use crate::domain::card::CardFilters;
use crate::forms::FormError;

/// Filter fields read from the index and API query strings.
///
/// `colors` may repeat (`colors=red&colors=blue`), which is why the query is
/// parsed with `serde_html_form` rather than `web::Query`. Pagination keys are
/// ignored here and read through the URL store instead.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CardFilterForm {
    #[validate(length(max = 128))]
    pub name: Option<String>,
    #[validate(length(max = 16))]
    pub set: Option<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    pub rarity: Option<String>,
    #[serde(rename = "type")]
    #[validate(length(max = 128))]
    pub type_line: Option<String>,
}

impl CardFilterForm {
    pub fn from_query(query: &str) -> Result<Self, FormError> {
        let form: Self =
            serde_html_form::from_str(query).map_err(|e| FormError::Malformed(e.to_string()))?;
        form.validate()?;
        Ok(form)
    }
}

fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl From<CardFilterForm> for CardFilters {
    fn from(form: CardFilterForm) -> Self {
        let colors: Vec<String> = form
            .colors
            .into_iter()
            .filter_map(|color| clean(Some(color)))
            .collect();

        Self {
            name: clean(form.name),
            set: clean(form.set),
            colors: (!colors.is_empty()).then(|| colors.join(",")),
            rarity: clean(form.rarity),
            type_line: clean(form.type_line),
        }
    }
}
