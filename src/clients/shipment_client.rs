use super::labels::{create_with_generated_label, SHIPMENT_PREFIX};
use crate::framework::{ActorClient, FrameworkError, Query, ResourceClient, SortOrder};
use crate::model::{NewShipment, Shipment, ShipmentCreate, ShipmentId, ShipmentUpdate};
use crate::shipment_actor::ShipmentError;
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

/// Client for interacting with the Shipment actor.
///
/// Edits go through [`ShipmentClient::edit_shipment`], which keeps the
/// pre-edit document as a past version.
#[derive(Clone)]
pub struct ShipmentClient {
    inner: ResourceClient<Shipment>,
    label_retry_limit: u32,
}

impl ShipmentClient {
    pub fn new(inner: ResourceClient<Shipment>) -> Self {
        Self {
            inner,
            label_retry_limit: 10,
        }
    }

    pub fn with_label_retry_limit(mut self, limit: u32) -> Self {
        self.label_retry_limit = limit;
        self
    }

    /// Creates a shipment and assigns its packing slips, generating
    /// `<CUSTOMER>-SH<nnn>` when no label is given.
    #[instrument(skip(self, shipment), fields(customer = %shipment.customer))]
    pub async fn create_shipment(&self, shipment: NewShipment) -> Result<ShipmentId, ShipmentError> {
        debug!("Sending request");
        let NewShipment {
            customer,
            label,
            packing_slips,
            delivery,
        } = shipment;
        let params = |label: String| ShipmentCreate {
            customer: customer.clone(),
            label,
            packing_slips: packing_slips.clone(),
            delivery: delivery.clone(),
            version_of: None,
            created_at: None,
        };
        if let Some(label) = label {
            return self.inner.create(params(label)).await.map_err(ShipmentError::from);
        }

        let existing = self.current_for_customer(&customer).await?.len();
        create_with_generated_label(
            &customer,
            SHIPMENT_PREFIX,
            existing,
            self.label_retry_limit,
            |e: &ShipmentError| matches!(e, ShipmentError::AlreadyExists(_)),
            |label| {
                let create = params(label);
                async move { self.inner.create(create).await.map_err(ShipmentError::from) }
            },
        )
        .await
    }

    /// Applies `update` and records the previous state as a past version.
    #[instrument(skip(self))]
    pub async fn edit_shipment(
        &self,
        id: ShipmentId,
        update: ShipmentUpdate,
    ) -> Result<Shipment, ShipmentError> {
        debug!("Sending request");
        let previous = self.require(id).await?;
        if previous.is_past_version {
            return Err(ShipmentError::PastVersion(id.to_string()));
        }
        let updated = self.inner.update(id, update).await?;
        match self.inner.create(ShipmentCreate::past_version_of(&previous)).await {
            Ok(version) => debug!(%version, "Recorded past version"),
            Err(e) => warn!(%id, error = %e, "Failed to record past version"),
        }
        Ok(updated)
    }

    /// Past versions of `id`, newest first.
    #[instrument(skip(self))]
    pub async fn history(&self, id: ShipmentId) -> Result<Vec<Shipment>, ShipmentError> {
        debug!("Sending request");
        let query = Query::filter(move |s: &Shipment| s.version_of == Some(id))
            .order(SortOrder::Descending);
        Ok(self.list(query).await?.items)
    }

    #[instrument(skip(self))]
    pub async fn current_for_customer(&self, customer: &str) -> Result<Vec<Shipment>, ShipmentError> {
        debug!("Sending request");
        let customer = customer.trim().to_uppercase();
        let query =
            Query::filter(move |s: &Shipment| !s.is_past_version && s.customer == customer);
        Ok(self.list(query).await?.items)
    }
}

#[async_trait]
impl ActorClient<Shipment> for ShipmentClient {
    type Error = ShipmentError;

    fn inner(&self) -> &ResourceClient<Shipment> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::model::{DeliveryDetails, DeliveryMethod};
    use chrono::Utc;

    fn shipment(id: u32, is_past_version: bool) -> Shipment {
        Shipment {
            id: ShipmentId(id),
            customer: "ACME".into(),
            label: "ACME-SH001".into(),
            packing_slips: vec![],
            delivery_method: DeliveryMethod::Pickup,
            carrier: None,
            tracking_number: None,
            delivery_speed: None,
            customer_account: None,
            is_past_version,
            version_of: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_edit_records_past_version() {
        let mut mock = MockClient::<Shipment>::new();
        let mut updated = shipment(1, false);
        updated.tracking_number = Some("1Z999".into());

        mock.expect_get(ShipmentId(1)).return_ok(Some(shipment(1, false)));
        mock.expect_update(ShipmentId(1)).return_ok(updated.clone());
        mock.expect_create().return_ok(ShipmentId(2));

        let client = ShipmentClient::new(mock.client());
        let update = ShipmentUpdate {
            delivery: Some(DeliveryDetails {
                delivery_method: DeliveryMethod::Pickup,
                tracking_number: Some("1Z999".into()),
                ..DeliveryDetails::default()
            }),
            ..ShipmentUpdate::default()
        };
        let result = client.edit_shipment(ShipmentId(1), update).await.unwrap();
        assert_eq!(result, updated);
        mock.verify();
    }

    #[tokio::test]
    async fn test_past_versions_cannot_be_edited() {
        let mut mock = MockClient::<Shipment>::new();
        mock.expect_get(ShipmentId(4)).return_ok(Some(shipment(4, true)));

        let client = ShipmentClient::new(mock.client());
        let err = client
            .edit_shipment(ShipmentId(4), ShipmentUpdate::default())
            .await
            .unwrap_err();
        assert_eq!(err, ShipmentError::PastVersion("shipment_4".into()));
        mock.verify();
    }
}
