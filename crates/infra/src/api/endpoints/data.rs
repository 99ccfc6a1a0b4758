//! Check-in, dashboard, insight and alert endpoints

use wellpulse_domain::{
    Alert, AlertStatus, AlertStatusUpdate, CheckinCreated, CheckinRequest, DailyCheckin,
    DashboardStats, DateRange, InsightData,
};

use crate::api::{ApiClient, ApiError};

#[derive(Clone)]
pub struct CheckinApi {
    client: ApiClient,
}

impl CheckinApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Store a check-in; its analysis runs server side afterwards.
    pub async fn create(&self, request: &CheckinRequest) -> Result<CheckinCreated, ApiError> {
        self.client.post("/checkins", request).await
    }

    pub async fn list(&self, range: DateRange) -> Result<Vec<DailyCheckin>, ApiError> {
        self.client.get(&format!("/checkins?range={range}")).await
    }

    pub async fn get(&self, id: &str) -> Result<DailyCheckin, ApiError> {
        self.client.get(&format!("/checkins/{}", urlencoding::encode(id))).await
    }
}

#[derive(Clone)]
pub struct DashboardApi {
    client: ApiClient,
}

impl DashboardApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn stats(&self, range: DateRange) -> Result<DashboardStats, ApiError> {
        self.client.get(&format!("/dashboard?range={range}")).await
    }
}

#[derive(Clone)]
pub struct InsightApi {
    client: ApiClient,
}

impl InsightApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, id: &str) -> Result<InsightData, ApiError> {
        self.client.get(&format!("/insights/{}", urlencoding::encode(id))).await
    }

    pub async fn recent(&self) -> Result<Vec<InsightData>, ApiError> {
        self.client.get("/insights/recent").await
    }
}

#[derive(Clone)]
pub struct AlertApi {
    client: ApiClient,
}

impl AlertApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Alert>, ApiError> {
        self.client.get("/alerts").await
    }

    pub async fn acknowledge(&self, id: &str) -> Result<Alert, ApiError> {
        self.update_status(id, AlertStatus::Acknowledged).await
    }

    pub async fn close(&self, id: &str) -> Result<Alert, ApiError> {
        self.update_status(id, AlertStatus::Closed).await
    }

    pub async fn update_status(&self, id: &str, status: AlertStatus) -> Result<Alert, ApiError> {
        let path = format!("/alerts/{}", urlencoding::encode(id));
        self.client.patch(&path, &AlertStatusUpdate { status }).await
    }
}
