//! Employee role API client.

use reqwest::{Client, StatusCode};

use crate::config::ApiConfig;
use crate::error::{AppError, Result};
use crate::models::{CreateEmployeeRole, EmployeeRole, RolePage, UpdateEmployeeRole};

/// REST client for the employee role endpoints.
///
/// Wraps the five CRUD operations exposed under `/api/employee_roles`.
/// Every call issues exactly one request; there is no caching and no retry
/// beyond the client-wide timeout. Cheap to clone, spawned tasks take their
/// own copy.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client from the injected configuration.
    pub fn new(config: &ApiConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn roles_url(&self) -> String {
        format!("{base}/api/employee_roles", base = self.base_url)
    }

    /// Fetch one page of role assignments, filtered by `search`.
    pub async fn list(&self, search: &str, page: u32) -> Result<RolePage> {
        let response = self
            .client
            .get(self.roles_url())
            .query(&[("search", search), ("page", &page.to_string())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::fetch("Erreur lors du chargement des rôles employés"));
        }

        Ok(response.json().await?)
    }

    /// Fetch a single role assignment by id.
    pub async fn get(&self, id: i64) -> Result<EmployeeRole> {
        let url = format!("{}/{id}", self.roles_url());
        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::not_found("Rôle employé introuvable"));
        }
        if !response.status().is_success() {
            return Err(AppError::fetch("Erreur lors du chargement du rôle employé"));
        }

        Ok(response.json().await?)
    }

    /// Create a new role assignment. The server assigns the id.
    pub async fn create(&self, data: &CreateEmployeeRole) -> Result<EmployeeRole> {
        let response = self.client.post(self.roles_url()).json(data).send().await?;

        if !response.status().is_success() {
            return Err(AppError::fetch("Erreur lors de la création du rôle employé"));
        }

        Ok(response.json().await?)
    }

    /// Replace the mutable fields of an existing role assignment.
    pub async fn update(&self, id: i64, data: &UpdateEmployeeRole) -> Result<EmployeeRole> {
        let url = format!("{}/{id}", self.roles_url());
        let response = self.client.put(&url).json(data).send().await?;

        if !response.status().is_success() {
            return Err(AppError::fetch("Erreur lors de la mise à jour du rôle employé"));
        }

        Ok(response.json().await?)
    }

    /// Delete a role assignment. The response body is ignored.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let url = format!("{}/{id}", self.roles_url());
        let response = self.client.delete(&url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::fetch("Erreur lors de la suppression du rôle employé"));
        }

        Ok(true)
    }

    /// Test connection to the API server.
    pub async fn test_connection(&self) -> Result<bool> {
        let url = format!("{base}/", base = self.base_url);
        let response = self.client.get(&url).send().await?;
        Ok(response.status().is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let client = ApiClient::new(&ApiConfig {
            base_url: "http://localhost:8000/".to_string(),
            timeout_secs: 30,
        });
        assert_eq!(client.roles_url(), "http://localhost:8000/api/employee_roles");
    }

    #[test]
    fn test_roles_url() {
        let client = ApiClient::new(&ApiConfig {
            base_url: "https://rh.example.com".to_string(),
            timeout_secs: 30,
        });
        assert_eq!(client.roles_url(), "https://rh.example.com/api/employee_roles");
    }
}
