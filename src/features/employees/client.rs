//! Client helpers for the employee endpoints, including the job-assignment
//! splits and the per-employee cleaning rota lookup.

use crate::{
    app_lib::{endpoints, get_json, get_json_with_query, AppError},
    features::employees::types::{Employee, EmployeeSchedule},
};

/// Fetches every employee.
pub async fn list_employees() -> Result<Vec<Employee>, AppError> {
    get_json(endpoints::EMPLOYEES).await
}

/// Employees with no cleaning assignment.
pub async fn unjob_employees() -> Result<Vec<Employee>, AppError> {
    get_json(endpoints::UNJOB_EMPLOYEES).await
}

/// Employees holding at least one cleaning assignment.
pub async fn getjob_employees() -> Result<Vec<Employee>, AppError> {
    get_json(endpoints::GETJOB_EMPLOYEES).await
}

/// The cleaning rota of one employee, after basic input validation.
pub async fn employee_schedule(employee_id: &str) -> Result<EmployeeSchedule, AppError> {
    let trimmed = employee_id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("Employee id is required.".to_string()));
    }

    get_json_with_query(endpoints::EMPLOYEE_SCHEDULE, &[("employee_id", trimmed)]).await
}
