//! Shipment details presenter: turns a [`TrackingData`] into the strings
//! shown on the tracking page.
//!
//! Every optional field goes through one total function with a fixed
//! fallback, so rendering never fails for a well-typed record.

use serde::{Deserialize, Serialize};

use crate::money;
use crate::shipment::{Carrier, DeclaredValue, Dimensions, Party, TrackingData};
use crate::time::short_date;

/// Shown wherever a value is missing.
pub const PLACEHOLDER: &str = "\u{2014}";

/// Carrier name when the record does not name one.
pub const DEFAULT_CARRIER_NAME: &str = "Bayanchor Logistics";

/// Carrier reference number when the record has none.
pub const DEFAULT_CARRIER_REF: &str = "BAY-19CD81";

/// Transport mode when neither the carrier nor the shipment declares one.
pub const DEFAULT_MODE: &str = "Road";

/// Package description fallback.
pub const NO_DESCRIPTION: &str = "No description provided";

/// Axis of a package's [`Dimensions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Length,
    Width,
    Height,
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// `"<value> <unit>"` for one axis, or [`PLACEHOLDER`].
#[must_use]
pub fn dimension(dimensions: Option<&Dimensions>, axis: Axis) -> String {
    dimensions.map_or_else(
        || PLACEHOLDER.to_string(),
        |dims| {
            let value = match axis {
                Axis::Length => dims.length,
                Axis::Width => dims.width,
                Axis::Height => dims.height,
            };
            format!("{value} {}", dims.unit)
        },
    )
}

/// `"<weight> kg"`.
#[must_use]
pub fn weight(kilograms: f64) -> String {
    format!("{kilograms} kg")
}

/// Number of pieces; one when unspecified.
#[must_use]
pub fn quantity(quantity: Option<u32>) -> String {
    quantity.unwrap_or(1).to_string()
}

/// Currency-formatted declared value, or [`PLACEHOLDER`].
#[must_use]
pub fn declared_value(value: Option<&DeclaredValue>) -> String {
    value.map_or_else(
        || PLACEHOLDER.to_string(),
        |v| money::format_currency(v.amount, &v.currency),
    )
}

/// Package description, or [`NO_DESCRIPTION`].
#[must_use]
pub fn description(description: Option<&str>) -> String {
    present(description).unwrap_or(NO_DESCRIPTION).to_string()
}

/// Carrier name, or [`DEFAULT_CARRIER_NAME`].
#[must_use]
pub fn carrier_name(carrier: Option<&Carrier>) -> String {
    present(carrier.and_then(|c| c.name.as_deref()))
        .unwrap_or(DEFAULT_CARRIER_NAME)
        .to_string()
}

/// Carrier reference code, or [`DEFAULT_CARRIER_REF`].
#[must_use]
pub fn carrier_reference(carrier: Option<&Carrier>) -> String {
    present(carrier.and_then(|c| c.tracking_code.as_deref()))
        .unwrap_or(DEFAULT_CARRIER_REF)
        .to_string()
}

/// Carrier mode, then shipment mode, then [`DEFAULT_MODE`]; lowercased.
#[must_use]
pub fn carrier_mode(carrier: Option<&Carrier>, shipment_mode: Option<&str>) -> String {
    present(carrier.and_then(|c| c.mode.as_deref()))
        .or_else(|| present(shipment_mode))
        .unwrap_or(DEFAULT_MODE)
        .to_lowercase()
}

/// Shipment mode, then [`DEFAULT_MODE`]; lowercased.
#[must_use]
pub fn shipment_mode(shipment_mode: Option<&str>) -> String {
    present(shipment_mode).unwrap_or(DEFAULT_MODE).to_lowercase()
}

/// Lowercase the token and replace its first `_` with a space.
///
/// Later underscores are kept: `SAME_DAY_EXPRESS` becomes
/// `same day_express`.
#[must_use]
pub fn service_type(token: &str) -> String {
    token.to_lowercase().replacen('_', " ", 1)
}

/// Optional phone line of a party; blank numbers are hidden.
#[must_use]
pub fn phone(phone: Option<&str>) -> Option<String> {
    present(phone).map(str::to_string)
}

/// Display form of a sender or receiver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyView {
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl From<&Party> for PartyView {
    fn from(party: &Party) -> Self {
        Self {
            name: party.name.clone(),
            address: party.address.clone(),
            phone: phone(party.phone.as_deref()),
        }
    }
}

/// Display form of the package block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageView {
    pub weight: String,
    pub length: String,
    pub width: String,
    pub height: String,
    pub quantity: String,
    pub declared_value: String,
    pub description: String,
}

/// Display form of the carrier block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierView {
    pub name: String,
    pub reference: String,
    pub mode: String,
}

/// Everything the shipment details card shows, already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentDetailsView {
    pub tracking_number: String,
    pub sender: PartyView,
    pub receiver: PartyView,
    pub package: PackageView,
    pub carrier: CarrierView,
    pub created: String,
    pub last_updated: String,
    pub service_type: String,
    pub shipment_mode: String,
}

impl From<&TrackingData> for ShipmentDetailsView {
    fn from(data: &TrackingData) -> Self {
        let pkg = &data.package;
        let dims = pkg.dimensions.as_ref();
        let carrier = data.carrier.as_ref();
        let mode = data.shipment_mode.as_deref();

        Self {
            tracking_number: data.tracking_number.to_string(),
            sender: PartyView::from(&data.sender),
            receiver: PartyView::from(&data.receiver),
            package: PackageView {
                weight: weight(pkg.weight),
                length: dimension(dims, Axis::Length),
                width: dimension(dims, Axis::Width),
                height: dimension(dims, Axis::Height),
                quantity: quantity(pkg.quantity),
                declared_value: declared_value(pkg.declared_value.as_ref()),
                description: description(pkg.description.as_deref()),
            },
            carrier: CarrierView {
                name: carrier_name(carrier),
                reference: carrier_reference(carrier),
                mode: carrier_mode(carrier, mode),
            },
            created: short_date(&data.created_at),
            last_updated: short_date(&data.updated_at),
            service_type: service_type(&data.service_type),
            shipment_mode: shipment_mode(mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shipment::Package;
    use chrono::{TimeZone, Utc};

    fn minimal() -> TrackingData {
        TrackingData::builder()
            .tracking_number("BAY-0001".parse().unwrap())
            .sender(Party::new("Ada Obi", "12 Marina Rd, Lagos"))
            .receiver(Party::new("Lars Berg", "Storgatan 4, Oslo"))
            .package(Package::with_weight(2.0))
            .service_type("EXPRESS_FREIGHT")
            .created_at(Utc.with_ymd_and_hms(2025, 3, 7, 9, 0, 0).unwrap())
            .updated_at(Utc.with_ymd_and_hms(2025, 3, 9, 18, 30, 0).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn should_render_placeholder_on_every_axis_when_dimensions_absent() {
        let view = ShipmentDetailsView::from(&minimal());
        assert_eq!(view.package.length, PLACEHOLDER);
        assert_eq!(view.package.width, PLACEHOLDER);
        assert_eq!(view.package.height, PLACEHOLDER);
    }

    #[test]
    fn should_render_value_and_unit_per_axis() {
        let dims = Dimensions {
            length: 40.0,
            width: 30.5,
            height: 12.0,
            unit: "cm".to_string(),
        };
        assert_eq!(dimension(Some(&dims), Axis::Length), "40 cm");
        assert_eq!(dimension(Some(&dims), Axis::Width), "30.5 cm");
        assert_eq!(dimension(Some(&dims), Axis::Height), "12 cm");
    }

    #[test]
    fn should_default_quantity_to_one() {
        assert_eq!(quantity(None), "1");
        assert_eq!(quantity(Some(4)), "4");
        assert_eq!(ShipmentDetailsView::from(&minimal()).package.quantity, "1");
    }

    #[test]
    fn should_format_declared_value_as_currency() {
        let value = DeclaredValue {
            amount: 1234.5,
            currency: "USD".to_string(),
        };
        assert_eq!(declared_value(Some(&value)), "$1,234.50");
        assert_eq!(declared_value(None), PLACEHOLDER);
    }

    #[test]
    fn should_fall_back_to_defaults_when_carrier_absent() {
        let view = ShipmentDetailsView::from(&minimal());
        assert_eq!(view.carrier.name, DEFAULT_CARRIER_NAME);
        assert_eq!(view.carrier.reference, DEFAULT_CARRIER_REF);
    }

    #[test]
    fn should_fall_back_to_defaults_when_carrier_fields_blank() {
        let carrier = Carrier {
            name: Some(String::new()),
            tracking_code: Some("  ".to_string()),
            mode: None,
        };
        assert_eq!(carrier_name(Some(&carrier)), DEFAULT_CARRIER_NAME);
        assert_eq!(carrier_reference(Some(&carrier)), DEFAULT_CARRIER_REF);
    }

    #[test]
    fn should_use_carrier_fields_when_present() {
        let carrier = Carrier {
            name: Some("Nordic Freight".to_string()),
            tracking_code: Some("NF-88231".to_string()),
            mode: Some("AIR".to_string()),
        };
        assert_eq!(carrier_name(Some(&carrier)), "Nordic Freight");
        assert_eq!(carrier_reference(Some(&carrier)), "NF-88231");
        assert_eq!(carrier_mode(Some(&carrier), Some("Sea")), "air");
    }

    #[test]
    fn should_prefer_shipment_mode_when_carrier_mode_absent() {
        let carrier = Carrier::default();
        assert_eq!(carrier_mode(Some(&carrier), Some("Sea")), "sea");
        assert_eq!(carrier_mode(None, Some("AIR")), "air");
    }

    #[test]
    fn should_default_mode_to_road() {
        assert_eq!(carrier_mode(None, None), "road");
        assert_eq!(shipment_mode(None), "road");
        let view = ShipmentDetailsView::from(&minimal());
        assert_eq!(view.carrier.mode, "road");
        assert_eq!(view.shipment_mode, "road");
    }

    #[test]
    fn should_format_service_type_replacing_first_underscore_only() {
        assert_eq!(service_type("EXPRESS_FREIGHT"), "express freight");
        assert_eq!(service_type("SAME_DAY_EXPRESS"), "same day_express");
        assert_eq!(service_type("STANDARD"), "standard");
    }

    #[test]
    fn should_fall_back_to_no_description() {
        assert_eq!(description(None), NO_DESCRIPTION);
        assert_eq!(description(Some("")), NO_DESCRIPTION);
        assert_eq!(description(Some("Machine parts")), "Machine parts");
    }

    #[test]
    fn should_format_weight_in_kilograms() {
        assert_eq!(weight(2.0), "2 kg");
        assert_eq!(weight(0.75), "0.75 kg");
    }

    #[test]
    fn should_hide_blank_phone() {
        let party = Party::new("Ada", "Lagos").with_phone(" ");
        assert!(PartyView::from(&party).phone.is_none());
        let party = Party::new("Ada", "Lagos").with_phone("+234 800 000");
        assert_eq!(
            PartyView::from(&party).phone.as_deref(),
            Some("+234 800 000")
        );
    }

    #[test]
    fn should_format_dates_as_short_dates() {
        let view = ShipmentDetailsView::from(&minimal());
        assert_eq!(view.created, "3/7/2025");
        assert_eq!(view.last_updated, "3/9/2025");
    }

    #[test]
    fn should_leave_source_record_untouched() {
        let data = minimal();
        let before = data.clone();
        let _view = ShipmentDetailsView::from(&data);
        assert_eq!(data, before);
    }

    #[test]
    fn should_serialize_view_in_camel_case() {
        let json = serde_json::to_value(ShipmentDetailsView::from(&minimal())).unwrap();
        assert_eq!(json["trackingNumber"], "BAY-0001");
        assert_eq!(json["package"]["declaredValue"], PLACEHOLDER);
        assert_eq!(json["lastUpdated"], "3/9/2025");
        assert!(json["sender"].get("phone").is_none());
    }
}
