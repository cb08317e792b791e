//! Startup seeding: load shipment records from a JSON file into storage.

use std::path::Path;

use bayanchor_app::ports::ShipmentRepository;
use bayanchor_app::services::shipment_service::ShipmentService;
use bayanchor_domain::error::BayanchorError;
use bayanchor_domain::shipment::TrackingData;

/// Seeding errors.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed file")]
    Io(#[from] std::io::Error),
    /// The seed file is not a JSON array of shipments.
    #[error("failed to parse seed file")]
    Json(#[from] serde_json::Error),
    /// A record was rejected while storing it.
    #[error("failed to store seed record {tracking_number}")]
    Service {
        tracking_number: String,
        #[source]
        source: BayanchorError,
    },
}

/// Parse a JSON array of [`TrackingData`].
///
/// # Errors
///
/// Returns [`SeedError::Json`] when the text is not a valid array of records.
pub fn parse(content: &str) -> Result<Vec<TrackingData>, SeedError> {
    Ok(serde_json::from_str(content)?)
}

/// Read `path` and register every record through `service`.
///
/// Returns how many records were stored.
///
/// # Errors
///
/// Returns the first read, parse, or validation failure; records before it
/// stay stored.
pub async fn load<R>(service: &ShipmentService<R>, path: &Path) -> Result<usize, SeedError>
where
    R: ShipmentRepository,
{
    let content = tokio::fs::read_to_string(path).await?;
    let records = parse(&content)?;
    let count = records.len();

    for record in records {
        let tracking_number = record.tracking_number.to_string();
        service
            .register(record)
            .await
            .map_err(|source| SeedError::Service {
                tracking_number,
                source,
            })?;
    }

    tracing::info!(count, path = %path.display(), "seeded shipments");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = r#"[
        {
            "trackingNumber": "BAY-20250307-001",
            "sender": { "name": "Ada Obi", "address": "12 Marina Rd, Lagos" },
            "receiver": { "name": "Lars Berg", "address": "Storgatan 4, Oslo" },
            "package": {
                "weight": 12.5,
                "dimensions": { "length": 40, "width": 30, "height": 20, "unit": "cm" },
                "quantity": 2,
                "declaredValue": { "amount": 1234.5, "currency": "USD" },
                "description": "Machine parts"
            },
            "carrier": { "name": "Nordic Freight", "trackingCode": "NF-88231", "mode": "AIR" },
            "serviceType": "EXPRESS_FREIGHT",
            "createdAt": "2025-03-07T09:00:00Z",
            "updatedAt": "2025-03-09T18:30:00Z"
        }
    ]"#;

    #[test]
    fn should_parse_array_of_shipments() {
        let records = parse(SEED).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].tracking_number.as_str(), "BAY-20250307-001");
        assert_eq!(records[0].package.quantity, Some(2));
    }

    #[test]
    fn should_reject_invalid_tracking_number_in_seed() {
        let bad = SEED.replace("BAY-20250307-001", "no");
        assert!(matches!(parse(&bad), Err(SeedError::Json(_))));
    }

    #[test]
    fn should_reject_non_array_document() {
        assert!(matches!(parse("{}"), Err(SeedError::Json(_))));
    }
}
