//! Listbox-style dropdown: open state, focus and selection.
//!
//! The controller owns the focus position so that every input (pointer or
//! keyboard) goes through [`Dropdown::select`], which is the single place the
//! `disabled` flags are enforced.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ui::Key;

/// Value carried by an option. Unique within one dropdown.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Number(i64),
    Text(String),
}

impl Display for OptionValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionValue::Number(n) => write!(f, "{n}"),
            OptionValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Number(value)
    }
}

impl From<usize> for OptionValue {
    fn from(value: usize) -> Self {
        i64::try_from(value)
            .map(OptionValue::Number)
            .unwrap_or_else(|_| OptionValue::Text(value.to_string()))
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropdownOption {
    pub value: OptionValue,
    pub label: String,
    /// Disabled options stay visible and focusable but can never be selected.
    pub disabled: bool,
}

impl DropdownOption {
    pub fn new(value: impl Into<OptionValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Where keyboard focus sits inside the control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Toggle,
    Option(usize),
}

#[derive(Debug, Clone)]
pub struct Dropdown {
    options: Vec<DropdownOption>,
    value: Option<OptionValue>,
    placeholder: String,
    disabled: bool,
    is_open: bool,
    focus: Focus,
}

impl Dropdown {
    pub fn new(options: Vec<DropdownOption>, value: Option<OptionValue>) -> Self {
        Self {
            options,
            value,
            placeholder: "Select an option".to_string(),
            disabled: false,
            is_open: false,
            focus: Focus::Toggle,
        }
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Disables the whole control; it then ignores every input.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn value(&self) -> Option<&OptionValue> {
        self.value.as_ref()
    }

    pub fn options(&self) -> &[DropdownOption] {
        &self.options
    }

    pub fn selected_option(&self) -> Option<&DropdownOption> {
        let value = self.value.as_ref()?;
        self.options.iter().find(|option| &option.value == value)
    }

    /// Label shown on the toggle button.
    pub fn display_label(&self) -> &str {
        self.selected_option()
            .map(|option| option.label.as_str())
            .unwrap_or(&self.placeholder)
    }

    /// Replaces the option list, keeping focus inside its bounds.
    pub fn set_options(&mut self, options: Vec<DropdownOption>) {
        self.options = options;
        if matches!(self.focus, Focus::Option(index) if index >= self.options.len()) {
            self.focus = Focus::Toggle;
        }
    }

    /// Pointer activation of the toggle button.
    pub fn toggle(&mut self) {
        if self.disabled {
            return;
        }
        if self.is_open {
            self.close();
        } else {
            self.is_open = true;
        }
    }

    /// Pointer activation of the option at `index`.
    pub fn click_option(&mut self, index: usize) -> Option<OptionValue> {
        if !self.is_open {
            return None;
        }
        self.select(index)
    }

    /// Pointer press anywhere on the page. Only presses outside the control
    /// close it, and only while it is open.
    pub fn pointer_down(&mut self, inside_control: bool) {
        if self.is_open && !inside_control {
            self.close();
        }
    }

    /// Moves focus onto an option, e.g. when it is hovered or tabbed to.
    pub fn focus_option(&mut self, index: usize) {
        if self.is_open && index < self.options.len() {
            self.focus = Focus::Option(index);
        }
    }

    /// Keyboard input routed to whatever currently holds focus. Returns the
    /// committed value when the key selects an option.
    pub fn key_down(&mut self, key: Key) -> Option<OptionValue> {
        if self.disabled {
            return None;
        }
        match self.focus {
            Focus::Toggle => {
                self.toggle_key(key);
                None
            }
            Focus::Option(index) => self.option_key(index, key),
        }
    }

    fn toggle_key(&mut self, key: Key) {
        match key {
            Key::ArrowDown | Key::ArrowUp => {
                if self.is_open {
                    self.focus_first();
                } else {
                    self.is_open = true;
                }
            }
            Key::Enter | Key::Space => self.toggle(),
            Key::Escape if self.is_open => self.close(),
            Key::Home if self.is_open => self.focus_first(),
            Key::End if self.is_open => self.focus_last(),
            _ => {}
        }
    }

    fn option_key(&mut self, index: usize, key: Key) -> Option<OptionValue> {
        let len = self.options.len();
        match key {
            Key::Enter | Key::Space => return self.select(index),
            Key::Escape => self.close(),
            Key::ArrowDown if len > 0 => self.focus = Focus::Option((index + 1) % len),
            Key::ArrowUp if len > 0 => self.focus = Focus::Option((index + len - 1) % len),
            Key::Home => self.focus_first(),
            Key::End => self.focus_last(),
            _ => {}
        }
        None
    }

    /// Commits the option at `index`. Disabled options are inert.
    fn select(&mut self, index: usize) -> Option<OptionValue> {
        let option = self.options.get(index)?;
        if self.disabled || option.disabled {
            return None;
        }
        let value = option.value.clone();
        self.value = Some(value.clone());
        self.close();
        Some(value)
    }

    fn focus_first(&mut self) {
        if !self.options.is_empty() {
            self.focus = Focus::Option(0);
        }
    }

    fn focus_last(&mut self) {
        if let Some(last) = self.options.len().checked_sub(1) {
            self.focus = Focus::Option(last);
        }
    }

    fn close(&mut self) {
        self.is_open = false;
        self.focus = Focus::Toggle;
    }

    /// Builds the template model. `href` maps an option value to the link
    /// that selects it; disabled options never get one.
    pub fn view<F>(&self, id: &str, label: &str, href: F) -> DropdownView
    where
        F: Fn(&OptionValue) -> String,
    {
        let options = self
            .options
            .iter()
            .enumerate()
            .map(|(index, option)| OptionView {
                value: option.value.to_string(),
                label: option.label.clone(),
                selected: self.value.as_ref() == Some(&option.value),
                disabled: option.disabled,
                focused: self.focus == Focus::Option(index),
                href: (!option.disabled && !self.disabled).then(|| href(&option.value)),
            })
            .collect();

        DropdownView {
            id: id.to_string(),
            label: label.to_string(),
            display_label: self.display_label().to_string(),
            expanded: self.is_open,
            disabled: self.disabled,
            options,
        }
    }
}

/// Template model for `partials/dropdown.html`.
#[derive(Debug, Serialize)]
pub struct DropdownView {
    pub id: String,
    pub label: String,
    pub display_label: String,
    pub expanded: bool,
    pub disabled: bool,
    pub options: Vec<OptionView>,
}

#[derive(Debug, Serialize)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
    pub disabled: bool,
    pub focused: bool,
    pub href: Option<String>,
}
