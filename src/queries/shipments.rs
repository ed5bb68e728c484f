//! Shipment search, history and manifest.

use super::QueryError;
use crate::clients::{PackingSlipClient, ShipmentClient, WorkOrderClient};
use crate::framework::{ActorClient, Page, Query, SortOrder};
use crate::model::{
    DeliveryMethod, Destination, PackingSlipId, Shipment, ShipmentId, WorkOrder, WorkOrderId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Page size limits applied to searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSettings {
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            default_page_size: 25,
            max_page_size: 100,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipmentSearch {
    pub customer: Option<String>,
    /// Case-insensitive match against label and tracking number.
    pub text: Option<String>,
    pub include_past_versions: bool,
    /// 1-based; `None` means the first page.
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl ShipmentSearch {
    fn matcher(&self) -> impl Fn(&Shipment) -> bool + Send + Sync + 'static {
        let customer = self.customer.as_deref().map(|c| c.trim().to_uppercase());
        let text = self
            .text
            .as_deref()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty());
        let include_past_versions = self.include_past_versions;
        move |s: &Shipment| {
            if s.is_past_version && !include_past_versions {
                return false;
            }
            if customer.as_ref().is_some_and(|c| *c != s.customer) {
                return false;
            }
            match &text {
                None => true,
                Some(text) => {
                    s.label.to_lowercase().contains(text)
                        || s
                            .tracking_number
                            .as_deref()
                            .is_some_and(|t| t.to_lowercase().contains(text))
                }
            }
        }
    }
}

/// Matching shipments, newest first, one page at a time.
#[instrument(skip(shipments))]
pub async fn search_shipments(
    shipments: &ShipmentClient,
    search: &ShipmentSearch,
    settings: PageSettings,
) -> Result<Page<Shipment>, QueryError> {
    let page = search.page.unwrap_or(1);
    if page == 0 {
        return Err(QueryError::InvalidPage(page));
    }
    let page_size = match search.page_size {
        None | Some(0) => settings.default_page_size,
        Some(size) => size.min(settings.max_page_size),
    };
    // Pages past the end come back empty; saturating keeps huge pages there.
    let offset = (page - 1).saturating_mul(page_size);
    let query = Query::filter(search.matcher())
        .order(SortOrder::Descending)
        .window(offset, page_size);
    let result = shipments.list(query).await?;
    debug!(total = result.total, returned = result.items.len(), "Shipment search");
    Ok(result)
}

/// Past versions of a shipment, newest first. Unknown shipments are a 404.
#[instrument(skip(shipments))]
pub async fn shipment_history(
    shipments: &ShipmentClient,
    id: ShipmentId,
) -> Result<Vec<Shipment>, QueryError> {
    shipments.require(id).await?;
    Ok(shipments.history(id).await?)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManifestLine {
    pub work_order: WorkOrderId,
    pub order_number: String,
    pub line: u32,
    pub part_number: String,
    pub part_rev: String,
    pub description: String,
    pub quantity: u32,
    pub destination_code: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManifestSlip {
    pub id: PackingSlipId,
    pub label: String,
    pub destination: Destination,
    pub lines: Vec<ManifestLine>,
    pub total_quantity: u32,
}

/// A shipment with every packing-slip line resolved against its work order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipmentManifest {
    pub id: ShipmentId,
    pub customer: String,
    pub label: String,
    pub delivery_method: DeliveryMethod,
    pub carrier: Option<String>,
    pub tracking_number: Option<String>,
    pub delivery_speed: Option<String>,
    pub customer_account: Option<String>,
    pub created_at: DateTime<Utc>,
    pub packing_slips: Vec<ManifestSlip>,
    pub total_quantity: u32,
}

#[instrument(skip(shipments, packing_slips, work_orders))]
pub async fn shipment_manifest(
    shipments: &ShipmentClient,
    packing_slips: &PackingSlipClient,
    work_orders: &WorkOrderClient,
    id: ShipmentId,
) -> Result<ShipmentManifest, QueryError> {
    let shipment = shipments.require(id).await?;
    let mut orders: BTreeMap<WorkOrderId, WorkOrder> = BTreeMap::new();
    let mut slips = Vec::with_capacity(shipment.packing_slips.len());

    for &slip_id in &shipment.packing_slips {
        let slip = packing_slips.require(slip_id).await?;
        let mut lines = Vec::with_capacity(slip.items.len());
        for item in &slip.items {
            if !orders.contains_key(&item.work_order) {
                let order = work_orders.require(item.work_order).await?;
                orders.insert(item.work_order, order);
            }
            let order = &orders[&item.work_order];
            let ordered = order.item(item.line);
            lines.push(ManifestLine {
                work_order: order.id,
                order_number: order.order_number.clone(),
                line: item.line,
                part_number: ordered.map(|i| i.part_number.clone()).unwrap_or_default(),
                part_rev: ordered.map(|i| i.part_rev.clone()).unwrap_or_default(),
                description: ordered.map(|i| i.description.clone()).unwrap_or_default(),
                quantity: item.quantity,
                destination_code: item.destination_code,
            });
        }
        slips.push(ManifestSlip {
            id: slip.id,
            label: slip.label,
            destination: slip.destination,
            total_quantity: lines.iter().map(|l| l.quantity).sum(),
            lines,
        });
    }

    Ok(ShipmentManifest {
        id: shipment.id,
        customer: shipment.customer,
        label: shipment.label,
        delivery_method: shipment.delivery_method,
        carrier: shipment.carrier,
        tracking_number: shipment.tracking_number,
        delivery_speed: shipment.delivery_speed,
        customer_account: shipment.customer_account,
        created_at: shipment.created_at,
        total_quantity: slips.iter().map(|s| s.total_quantity).sum(),
        packing_slips: slips,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;

    fn shipment(id: u32, label: &str, tracking: Option<&str>, past: bool) -> Shipment {
        Shipment {
            id: ShipmentId(id),
            customer: "ACME".into(),
            label: label.into(),
            packing_slips: vec![],
            delivery_method: DeliveryMethod::Carrier,
            carrier: Some("UPS".into()),
            tracking_number: tracking.map(String::from),
            delivery_speed: None,
            customer_account: None,
            is_past_version: past,
            version_of: past.then_some(ShipmentId(1)),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_search_text_matches_label_or_tracking() {
        let search = ShipmentSearch {
            text: Some("1z9".into()),
            ..ShipmentSearch::default()
        };
        let matches = search.matcher();
        assert!(matches(&shipment(1, "ACME-SH001", Some("1Z999"), false)));
        assert!(!matches(&shipment(2, "ACME-SH002", None, false)));
        assert!(!matches(&shipment(3, "ACME-SH001", Some("1Z999"), true)));
    }

    #[test]
    fn test_search_customer_is_case_insensitive() {
        let search = ShipmentSearch {
            customer: Some("acme".into()),
            include_past_versions: true,
            ..ShipmentSearch::default()
        };
        let matches = search.matcher();
        assert!(matches(&shipment(3, "ACME-SH001", None, true)));
        let mut other = shipment(4, "GLOBEX-SH001", None, false);
        other.customer = "GLOBEX".into();
        assert!(!matches(&other));
    }

    #[tokio::test]
    async fn test_page_zero_is_rejected() {
        let mock = MockClient::<Shipment>::new();
        let client = ShipmentClient::new(mock.client());
        let search = ShipmentSearch {
            page: Some(0),
            ..ShipmentSearch::default()
        };
        let err = search_shipments(&client, &search, PageSettings::default())
            .await
            .unwrap_err();
        assert_eq!(err, QueryError::InvalidPage(0));
        mock.verify();
    }
}
