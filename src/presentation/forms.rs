//! Small helpers shared by the auth and profile pages.

use web_sys::{Element, HtmlInputElement, HtmlOptionElement, HtmlSelectElement};

use crate::domain::league::Team;
use crate::infrastructure::ui::element_by_id;

pub const TEAM_PLACEHOLDER: &str = "Select a team...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

pub fn input_value(id: &str) -> String {
    element_by_id::<HtmlInputElement>(id).map(|input| input.value()).unwrap_or_default()
}

/// Status line under a form, styled by outcome
pub fn set_message(element: &Element, message: &str, kind: MessageKind) {
    element.set_text_content(Some(message));
    let classes = element.class_list();
    let _ = classes.remove_2("auth-message--success", "auth-message--error");
    let _ = match kind {
        MessageKind::Success => classes.add_1("auth-message--success"),
        MessageKind::Error => classes.add_1("auth-message--error"),
    };
}

/// Replaces the options of `select` with a placeholder plus one option per team.
/// With `with_colors`, team colours are kept in `data-primary-color` / `data-secondary-color`.
pub fn fill_team_select(select: &HtmlSelectElement, teams: &[Team], with_colors: bool) {
    select.set_inner_html("");
    if let Ok(placeholder) = HtmlOptionElement::new_with_text_and_value(TEAM_PLACEHOLDER, "") {
        let _ = select.append_child(&placeholder);
    }
    for team in teams {
        let Ok(option) = HtmlOptionElement::new_with_text_and_value(&team.name, &team.id.to_string())
        else {
            continue;
        };
        if with_colors {
            let dataset = option.dataset();
            let _ = dataset.set("primaryColor", &team.primary_color);
            let _ = dataset.set("secondaryColor", &team.secondary_color);
        }
        let _ = select.append_child(&option);
    }
}

/// Selects `team_id` if the select offers it
pub fn preselect_team(select: &HtmlSelectElement, team_id: u32) {
    let value = team_id.to_string();
    let selector = format!("option[value=\"{value}\"]");
    if select.query_selector(&selector).ok().flatten().is_some() {
        select.set_value(&value);
    }
}

/// [`set_message`] on the element with `id`, if the page has one
pub fn show_message(id: &str, message: &str, kind: MessageKind) {
    if let Some(element) = element(id) {
        set_message(&element, message, kind);
    }
}

pub fn element(id: &str) -> Option<Element> {
    element_by_id::<Element>(id)
}

pub fn select(id: &str) -> Option<HtmlSelectElement> {
    element_by_id::<HtmlSelectElement>(id)
}
