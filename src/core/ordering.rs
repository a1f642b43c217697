use crate::domain::model::Employee;
use std::cmp::Ordering;

/// Locale-independent case-insensitive comparison over Unicode lowercase mappings.
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// First name, then last name, both ignoring case.
pub fn by_name(a: &Employee, b: &Employee) -> Ordering {
    cmp_ignore_case(a.first_name(), b.first_name())
        .then_with(|| cmp_ignore_case(a.last_name(), b.last_name()))
}

/// Stable, so equal names keep their relative input order.
pub fn sort_employees(employees: &mut [Employee]) {
    employees.sort_by(by_name);
}
