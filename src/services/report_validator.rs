use std::collections::{HashMap, HashSet};
use crate::structs::report::report_definition::ReportDefinition;
use crate::structs::validation_result::ValidationResult;

pub struct ReportValidator;

impl ReportValidator {

    pub fn validate(definition: &ReportDefinition) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if definition.id.trim().is_empty() {
            errors.push("id must not be empty".to_string());
        }
        if definition.name.trim().is_empty() {
            errors.push("name must not be empty".to_string());
        }
        for (label, field) in [
            ("numerator", &definition.calculation.numerator.field),
            ("denominator", &definition.calculation.denominator.field),
        ] {
            if field.trim().is_empty() {
                errors.push(format!("calculation.{label}.field must not be empty"));
            }
        }

        Self::check_categories(definition, &mut errors, &mut warnings);

        ValidationResult::from_findings(errors, warnings)
    }

    fn check_categories(definition: &ReportDefinition, errors: &mut Vec<String>, warnings: &mut Vec<String>) {
        let categories = &definition.categories;
        if categories.is_empty() {
            warnings.push("no categories defined, every row will be uncategorized".to_string());
            return;
        }

        let defaults: Vec<usize> = categories
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_default)
            .map(|(i, _)| i)
            .collect();
        match defaults.as_slice() {
            [] => warnings.push("no catch-all category, unmatched rows will be uncategorized".to_string()),
            [index] if *index != categories.len() - 1 => errors.push(format!(
                "catch-all category '{}' must be the last category",
                categories[*index].name
            )),
            [_] => {}
            many => errors.push(format!("expected at most one catch-all category, found {}", many.len())),
        }

        let mut names = HashSet::new();
        let mut keyword_owner: HashMap<String, &str> = HashMap::new();

        for category in categories {
            if category.name.trim().is_empty() {
                errors.push("category name must not be empty".to_string());
            } else if !names.insert(category.name.trim().to_lowercase()) {
                errors.push(format!("duplicate category name '{}'", category.name));
            }

            if !is_hex_color(&category.color) {
                errors.push(format!(
                    "category '{}' has invalid color '{}', expected #RRGGBB",
                    category.name, category.color
                ));
            }

            if category.is_default {
                continue;
            }

            if category.keywords.iter().all(|k| k.trim().is_empty()) {
                errors.push(format!("category '{}' has no keywords", category.name));
            }

            for keyword in category.keywords.iter().map(|k| k.trim().to_lowercase()).filter(|k| !k.is_empty()) {
                if let Some(owner) = keyword_owner.get(&keyword) {
                    if *owner != category.name {
                        warnings.push(format!(
                            "keyword '{}' in '{}' is shadowed by '{}'",
                            keyword, category.name, owner
                        ));
                    }
                } else {
                    keyword_owner.insert(keyword, &category.name);
                }
            }
        }
    }
}

fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}
