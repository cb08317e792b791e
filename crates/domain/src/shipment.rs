//! Shipment tracking record: what a customer sees after entering a
//! tracking number.
//!
//! Records are owned by whoever fetched them; nothing in the presenter
//! mutates them. Invariants are checked once, when a record enters the
//! system, via [`TrackingData::validate`].

use serde::{Deserialize, Serialize};

use crate::error::{BayanchorError, ValidationError};
use crate::id::TrackingNumber;
use crate::money;
use crate::time::{Timestamp, now};

/// One shipment as returned by the tracking lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingData {
    pub tracking_number: TrackingNumber,
    pub sender: Party,
    pub receiver: Party,
    pub package: Package,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<Carrier>,
    /// Fallback transport mode when the carrier does not declare one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipment_mode: Option<String>,
    /// Shipping tier token such as `EXPRESS_FREIGHT`.
    pub service_type: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Sender or receiver of a shipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Party {
    #[must_use]
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            phone: None,
        }
    }

    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

/// Physical attributes of the parcel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    /// Kilograms.
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_value: Option<DeclaredValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Package {
    /// A package with only its weight known.
    #[must_use]
    pub fn with_weight(weight: f64) -> Self {
        Self {
            weight,
            dimensions: None,
            quantity: None,
            declared_value: None,
            description: None,
        }
    }
}

/// Box dimensions, all expressed in the same `unit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub unit: String,
}

/// Value the shipper attributes to the contents, for customs and insurance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclaredValue {
    pub amount: f64,
    /// ISO 4217 code, e.g. `USD`.
    pub currency: String,
}

/// Carrier metadata; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Carrier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

impl TrackingData {
    /// Create a builder for constructing a [`TrackingData`].
    #[must_use]
    pub fn builder() -> TrackingDataBuilder {
        TrackingDataBuilder::default()
    }

    /// Check the invariants every stored record must satisfy.
    ///
    /// # Errors
    ///
    /// Returns [`BayanchorError::Validation`] naming the first violation.
    pub fn validate(&self) -> Result<(), BayanchorError> {
        require("sender.name", &self.sender.name)?;
        require("sender.address", &self.sender.address)?;
        require("receiver.name", &self.receiver.name)?;
        require("receiver.address", &self.receiver.address)?;
        require("serviceType", &self.service_type)?;

        if !is_measure(self.package.weight) {
            return Err(ValidationError::InvalidWeight.into());
        }

        if let Some(dims) = &self.package.dimensions {
            let measures = [dims.length, dims.width, dims.height];
            if !measures.into_iter().all(is_measure) || dims.unit.trim().is_empty() {
                return Err(ValidationError::InvalidDimensions.into());
            }
        }

        if let Some(value) = &self.package.declared_value {
            if !money::is_currency_code(&value.currency) {
                return Err(ValidationError::InvalidCurrency(value.currency.clone()).into());
            }
            if !value.amount.is_finite() {
                return Err(ValidationError::InvalidAmount("package.declaredValue.amount").into());
            }
        }

        Ok(())
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::EmptyField(field))
    } else {
        Ok(())
    }
}

fn is_measure(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Step-by-step builder for [`TrackingData`].
#[derive(Debug, Default)]
pub struct TrackingDataBuilder {
    tracking_number: Option<TrackingNumber>,
    sender: Option<Party>,
    receiver: Option<Party>,
    package: Option<Package>,
    carrier: Option<Carrier>,
    shipment_mode: Option<String>,
    service_type: Option<String>,
    created_at: Option<Timestamp>,
    updated_at: Option<Timestamp>,
}

impl TrackingDataBuilder {
    #[must_use]
    pub fn tracking_number(mut self, number: TrackingNumber) -> Self {
        self.tracking_number = Some(number);
        self
    }

    #[must_use]
    pub fn sender(mut self, sender: Party) -> Self {
        self.sender = Some(sender);
        self
    }

    #[must_use]
    pub fn receiver(mut self, receiver: Party) -> Self {
        self.receiver = Some(receiver);
        self
    }

    #[must_use]
    pub fn package(mut self, package: Package) -> Self {
        self.package = Some(package);
        self
    }

    #[must_use]
    pub fn carrier(mut self, carrier: Carrier) -> Self {
        self.carrier = Some(carrier);
        self
    }

    #[must_use]
    pub fn shipment_mode(mut self, mode: impl Into<String>) -> Self {
        self.shipment_mode = Some(mode.into());
        self
    }

    #[must_use]
    pub fn service_type(mut self, service_type: impl Into<String>) -> Self {
        self.service_type = Some(service_type.into());
        self
    }

    #[must_use]
    pub fn created_at(mut self, ts: Timestamp) -> Self {
        self.created_at = Some(ts);
        self
    }

    #[must_use]
    pub fn updated_at(mut self, ts: Timestamp) -> Self {
        self.updated_at = Some(ts);
        self
    }

    /// Consume the builder, validate, and return a [`TrackingData`].
    ///
    /// Timestamps default to now; `updated_at` defaults to `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`BayanchorError::Validation`] if a required part is missing
    /// or the assembled record fails [`TrackingData::validate`].
    pub fn build(self) -> Result<TrackingData, BayanchorError> {
        let tracking_number = self
            .tracking_number
            .ok_or(ValidationError::EmptyField("trackingNumber"))?;
        let sender = self.sender.ok_or(ValidationError::EmptyField("sender"))?;
        let receiver = self
            .receiver
            .ok_or(ValidationError::EmptyField("receiver"))?;
        let package = self.package.ok_or(ValidationError::EmptyField("package"))?;
        let created_at = self.created_at.unwrap_or_else(now);

        let data = TrackingData {
            tracking_number,
            sender,
            receiver,
            package,
            carrier: self.carrier,
            shipment_mode: self.shipment_mode,
            service_type: self.service_type.unwrap_or_default(),
            created_at,
            updated_at: self.updated_at.unwrap_or(created_at),
        };
        data.validate()?;
        Ok(data)
    }
}
