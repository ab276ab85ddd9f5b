use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

/// Prefix every route is mounted under, as on the public demo service.
pub const BASE_PATH: &str = "/api/v1";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u64,
    pub employee_name: String,
    pub employee_salary: u64,
    pub employee_age: u64,
    pub profile_image: String,
}

/// Create/update body. The real service accepts numbers sent as strings.
#[derive(Debug, Deserialize)]
pub struct EmployeeInput {
    pub name: String,
    pub salary: Numeric,
    pub age: Numeric,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(u64),
    Text(String),
}

impl Numeric {
    fn value(&self) -> Option<u64> {
        match self {
            Numeric::Number(n) => Some(*n),
            Numeric::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Store {
    last_id: u64,
    records: BTreeMap<u64, Employee>,
}

impl Store {
    pub fn with_records(records: Vec<Employee>) -> Self {
        let last_id = records.iter().map(|e| e.id).max().unwrap_or(0);
        Self {
            last_id,
            records: records.into_iter().map(|e| (e.id, e)).collect(),
        }
    }

    fn allocate_id(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }
}

pub type Db = Arc<RwLock<Store>>;

type Reply = (StatusCode, Json<Value>);

pub fn app() -> Router {
    app_with(Vec::new())
}

pub fn app_with(records: Vec<Employee>) -> Router {
    let db: Db = Arc::new(RwLock::new(Store::with_records(records)));
    let api = Router::new()
        .route("/employees", get(list_employees))
        .route("/employee/{id}", get(get_employee))
        .route("/create", post(create_employee))
        .route("/update/{id}", put(update_employee))
        .route("/delete/{id}", delete(delete_employee))
        .with_state(db);
    Router::new().nest(BASE_PATH, api)
}

pub async fn run(listener: TcpListener, records: Vec<Employee>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(records)).await
}

/// A few records in the shape the public service ships with.
pub fn demo_records() -> Vec<Employee> {
    [("Tiger Nixon", 320800, 61), ("Garrett Winters", 170750, 63), ("Ashton Cox", 86000, 66)]
        .into_iter()
        .zip(1..)
        .map(|((name, salary, age), id)| Employee {
            id,
            employee_name: name.to_string(),
            employee_salary: salary,
            employee_age: age,
            profile_image: String::new(),
        })
        .collect()
}

fn success(data: Value, message: &str) -> Reply {
    (
        StatusCode::OK,
        Json(json!({ "status": "success", "data": data, "message": message })),
    )
}

fn failure(status: StatusCode, message: &str) -> Reply {
    (status, Json(json!({ "status": "error", "message": message })))
}

fn not_found(id: u64) -> Reply {
    failure(StatusCode::NOT_FOUND, &format!("Employee {id} not found"))
}

/// Both numbers must parse before anything is written.
fn validate(input: &EmployeeInput) -> Result<(u64, u64), Reply> {
    let salary = input
        .salary
        .value()
        .ok_or_else(|| failure(StatusCode::UNPROCESSABLE_ENTITY, "salary must be a whole number"))?;
    let age = input
        .age
        .value()
        .ok_or_else(|| failure(StatusCode::UNPROCESSABLE_ENTITY, "age must be a whole number"))?;
    Ok((salary, age))
}

async fn list_employees(State(db): State<Db>) -> Reply {
    let store = db.read().await;
    let data: Vec<&Employee> = store.records.values().collect();
    tracing::debug!(count = data.len(), "list employees");
    success(json!(data), "Successfully! All records has been fetched.")
}

/// Answers with the bare record, not the `data` envelope.
async fn get_employee(State(db): State<Db>, Path(id): Path<u64>) -> Reply {
    let store = db.read().await;
    match store.records.get(&id) {
        Some(employee) => (StatusCode::OK, Json(json!(employee))),
        None => not_found(id),
    }
}

async fn create_employee(State(db): State<Db>, Json(input): Json<EmployeeInput>) -> Reply {
    let (salary, age) = match validate(&input) {
        Ok(numbers) => numbers,
        Err(reply) => return reply,
    };
    let mut store = db.write().await;
    let id = store.allocate_id();
    store.records.insert(
        id,
        Employee {
            id,
            employee_name: input.name.clone(),
            employee_salary: salary,
            employee_age: age,
            profile_image: String::new(),
        },
    );
    tracing::info!(id, name = %input.name, "employee created");
    success(
        json!({ "name": input.name, "salary": input.salary, "age": input.age, "id": id }),
        "Successfully! Record has been added.",
    )
}

async fn update_employee(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<EmployeeInput>,
) -> Reply {
    let (salary, age) = match validate(&input) {
        Ok(numbers) => numbers,
        Err(reply) => return reply,
    };
    let mut store = db.write().await;
    let Some(employee) = store.records.get_mut(&id) else {
        return not_found(id);
    };
    employee.employee_name = input.name.clone();
    employee.employee_salary = salary;
    employee.employee_age = age;
    tracing::info!(id, "employee updated");
    success(
        json!({ "name": input.name, "salary": input.salary, "age": input.age }),
        "Successfully! Record has been updated.",
    )
}

async fn delete_employee(State(db): State<Db>, Path(id): Path<u64>) -> Reply {
    let mut store = db.write().await;
    match store.records.remove(&id) {
        Some(_) => {
            tracing::info!(id, "employee deleted");
            success(json!(id.to_string()), "Successfully! Record has been deleted")
        }
        None => not_found(id),
    }
}
