//! The form behind the screen: a new-record draft or an edit in progress.
//!
//! The buffer owns copies of the text it shows. Loading an employee copies its
//! fields in; nothing typed here reaches the collection cache until a submit
//! succeeds and the list is fetched again.

use crate::types::{Employee, EmployeeFields, EmployeeId};

/// Which submit the buffer will perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode<'a> {
    Create,
    Update(&'a EmployeeId),
}

impl EditMode<'_> {
    /// Heading shown above the form.
    pub fn heading(&self) -> &'static str {
        match self {
            EditMode::Create => "Create New Employee:",
            EditMode::Update(_) => "Update Employee:",
        }
    }

    /// Label of the submit button.
    pub fn action_label(&self) -> &'static str {
        match self {
            EditMode::Create => "Create",
            EditMode::Update(_) => "Update",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    name: String,
    salary: String,
    age: String,
    selected: Option<EmployeeId>,
}

impl EditBuffer {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn salary(&self) -> &str {
        &self.salary
    }

    pub fn age(&self) -> &str {
        &self.age
    }

    pub fn selected(&self) -> Option<&EmployeeId> {
        self.selected.as_ref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_salary(&mut self, salary: impl Into<String>) {
        self.salary = salary.into();
    }

    pub fn set_age(&mut self, age: impl Into<String>) {
        self.age = age.into();
    }

    pub fn mode(&self) -> EditMode<'_> {
        match &self.selected {
            Some(id) => EditMode::Update(id),
            None => EditMode::Create,
        }
    }

    /// Empty Create mode: no selection, no text.
    pub fn is_blank(&self) -> bool {
        self.selected.is_none() && self.name.is_empty() && self.salary.is_empty() && self.age.is_empty()
    }

    pub fn fields(&self) -> EmployeeFields {
        EmployeeFields::new(self.name.clone(), self.salary.clone(), self.age.clone())
    }

    pub(crate) fn load(&mut self, employee: Employee) {
        self.name = employee.name;
        self.salary = employee.salary;
        self.age = employee.age;
        self.selected = Some(employee.id);
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}
