//! The boundary through which every remote read and write goes.
//!
//! # Design
//! `EmployeeGateway` is the seam the controller is generic over, so tests can
//! swap the network for a scripted fake. `HttpGateway` is the real thing: it
//! pairs the stateless `EmployeeClient` codec with a `Transport`. Each call is
//! an independent round trip with no shared transaction.

use crate::client::EmployeeClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::transport::{Transport, UreqTransport};
use crate::types::{Acknowledgement, Employee, EmployeeFields, EmployeeId};

pub trait EmployeeGateway {
    fn list_all(&self) -> Result<Vec<Employee>, ApiError>;
    fn get_one(&self, id: &EmployeeId) -> Result<Employee, ApiError>;
    fn create(&self, fields: &EmployeeFields) -> Result<Acknowledgement, ApiError>;
    fn update(&self, id: &EmployeeId, fields: &EmployeeFields) -> Result<Acknowledgement, ApiError>;
    fn delete(&self, id: &EmployeeId) -> Result<Acknowledgement, ApiError>;
}

impl<G: EmployeeGateway + ?Sized> EmployeeGateway for &G {
    fn list_all(&self) -> Result<Vec<Employee>, ApiError> {
        (**self).list_all()
    }

    fn get_one(&self, id: &EmployeeId) -> Result<Employee, ApiError> {
        (**self).get_one(id)
    }

    fn create(&self, fields: &EmployeeFields) -> Result<Acknowledgement, ApiError> {
        (**self).create(fields)
    }

    fn update(&self, id: &EmployeeId, fields: &EmployeeFields) -> Result<Acknowledgement, ApiError> {
        (**self).update(id, fields)
    }

    fn delete(&self, id: &EmployeeId) -> Result<Acknowledgement, ApiError> {
        (**self).delete(id)
    }
}

/// Gateway over HTTP: build with the client, execute with the transport,
/// parse with the client.
#[derive(Clone)]
pub struct HttpGateway<T> {
    client: EmployeeClient,
    transport: T,
}

impl<T: Transport> HttpGateway<T> {
    pub fn new(client: EmployeeClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &EmployeeClient {
        &self.client
    }
}

impl HttpGateway<UreqTransport> {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(EmployeeClient::new(&config.base_url), UreqTransport::new(config))
    }
}

impl<T: Transport> EmployeeGateway for HttpGateway<T> {
    fn list_all(&self) -> Result<Vec<Employee>, ApiError> {
        let response = self.transport.execute(self.client.build_list_employees())?;
        self.client.parse_list_employees(response)
    }

    fn get_one(&self, id: &EmployeeId) -> Result<Employee, ApiError> {
        let response = self.transport.execute(self.client.build_get_employee(id))?;
        self.client.parse_get_employee(id, response)
    }

    fn create(&self, fields: &EmployeeFields) -> Result<Acknowledgement, ApiError> {
        let response = self.transport.execute(self.client.build_create_employee(fields)?)?;
        self.client.parse_create_employee(response)
    }

    fn update(&self, id: &EmployeeId, fields: &EmployeeFields) -> Result<Acknowledgement, ApiError> {
        let response = self
            .transport
            .execute(self.client.build_update_employee(id, fields)?)?;
        self.client.parse_update_employee(response)
    }

    fn delete(&self, id: &EmployeeId) -> Result<Acknowledgement, ApiError> {
        let response = self.transport.execute(self.client.build_delete_employee(id))?;
        self.client.parse_delete_employee(response)
    }
}
