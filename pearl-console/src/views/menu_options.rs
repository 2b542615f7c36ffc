//! Menu option groups view
//!
//! One table row per option, repeating the owning group's fields, in the
//! order the backend returned them. The row source is always the fetched
//! state snapshot.

use pearl_client::FetchState;
use ratatui::prelude::*;
use shared::OptionGroup;

use super::list::{ListSpec, render_remote_list};

const LIST_SPEC: ListSpec = ListSpec {
    title: " Menu Options ",
    idle_message: "No menu item selected - press 'e' and enter a menu item id",
    empty_message: "No option groups for this menu item",
    header: &["Group", "Max", "Required", "Option", "Price"],
    widths: &[
        Constraint::Percentage(25),
        Constraint::Length(5),
        Constraint::Length(8),
        Constraint::Percentage(40),
        Constraint::Length(10),
    ],
};

/// Flatten a group into one row per option.
pub fn option_rows(group: &OptionGroup) -> Vec<Vec<String>> {
    let required = if group.is_required { "Yes" } else { "No" };
    group
        .options
        .iter()
        .map(|option| {
            vec![
                group.name.clone(),
                group.max_selections.to_string(),
                required.to_string(),
                option.name.clone(),
                option.price.to_string(),
            ]
        })
        .collect()
}

pub fn render(f: &mut Frame, area: Rect, state: &FetchState<Vec<OptionGroup>>) {
    render_remote_list(f, area, &LIST_SPEC, state, option_rows);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::MenuOption;

    fn size_group() -> OptionGroup {
        OptionGroup {
            id: 1,
            name: "Size".to_string(),
            max_selections: 1,
            is_required: true,
            options: vec![
                MenuOption {
                    id: 10,
                    name: "Small".to_string(),
                    price: Decimal::ZERO,
                },
                MenuOption {
                    id: 11,
                    name: "Large".to_string(),
                    price: Decimal::from(20),
                },
            ],
        }
    }

    #[test]
    fn test_one_row_per_option_with_group_fields_repeated() {
        let rows = option_rows(&size_group());

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["Size", "1", "Yes", "Small", "0"]);
        assert_eq!(rows[1], vec!["Size", "1", "Yes", "Large", "20"]);
    }

    #[test]
    fn test_flattening_yields_sum_of_option_counts() {
        let mut toppings = size_group();
        toppings.name = "Toppings".to_string();
        toppings.is_required = false;
        toppings.options.push(MenuOption {
            id: 12,
            name: "Extra".to_string(),
            price: Decimal::from(5),
        });

        let groups = vec![size_group(), toppings];
        let total: usize = groups.iter().map(|g| option_rows(g).len()).sum();

        assert_eq!(total, 5);
    }

    #[test]
    fn test_group_without_options_yields_no_rows() {
        let mut group = size_group();
        group.options.clear();
        assert!(option_rows(&group).is_empty());
    }
}
