use super::labels::{create_with_generated_label, PACKING_SLIP_PREFIX};
use crate::framework::{ActorClient, FrameworkError, Query, ResourceClient};
use crate::model::{
    NewPackingSlip, PackingSlip, PackingSlipCreate, PackingSlipId, PackingSlipUpdate, ShipmentId,
};
use crate::packing_slip_actor::{PackingSlipAction, PackingSlipActionResult, PackingSlipError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the PackingSlip actor.
#[derive(Clone)]
pub struct PackingSlipClient {
    inner: ResourceClient<PackingSlip>,
    label_retry_limit: u32,
}

impl PackingSlipClient {
    pub fn new(inner: ResourceClient<PackingSlip>) -> Self {
        Self {
            inner,
            label_retry_limit: 10,
        }
    }

    /// How many label conflicts to absorb before giving up.
    pub fn with_label_retry_limit(mut self, limit: u32) -> Self {
        self.label_retry_limit = limit;
        self
    }

    /// Creates a packing slip, generating `<CUSTOMER>-PS<nnn>` when no label
    /// is given. An explicit label that is already taken is a conflict.
    #[instrument(skip(self, slip), fields(customer = %slip.customer))]
    pub async fn create_packing_slip(
        &self,
        slip: NewPackingSlip,
    ) -> Result<PackingSlipId, PackingSlipError> {
        debug!("Sending request");
        let NewPackingSlip {
            customer,
            label,
            destination,
            items,
        } = slip;
        let params = |label: String| PackingSlipCreate {
            customer: customer.clone(),
            label,
            destination,
            items: items.clone(),
        };
        if let Some(label) = label {
            return self.inner.create(params(label)).await.map_err(PackingSlipError::from);
        }

        let existing = self.for_customer(&customer).await?.len();
        create_with_generated_label(
            &customer,
            PACKING_SLIP_PREFIX,
            existing,
            self.label_retry_limit,
            |e: &PackingSlipError| matches!(e, PackingSlipError::AlreadyExists(_)),
            |label| {
                let create = params(label);
                async move { self.inner.create(create).await.map_err(PackingSlipError::from) }
            },
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn update_packing_slip(
        &self,
        id: PackingSlipId,
        update: PackingSlipUpdate,
    ) -> Result<PackingSlip, PackingSlipError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(PackingSlipError::from)
    }

    /// Every slip of `customer`, oldest first.
    #[instrument(skip(self))]
    pub async fn for_customer(&self, customer: &str) -> Result<Vec<PackingSlip>, PackingSlipError> {
        debug!("Sending request");
        let customer = customer.trim().to_uppercase();
        let page = self
            .list(Query::filter(move |s: &PackingSlip| s.customer == customer))
            .await?;
        Ok(page.items)
    }

    #[instrument(skip(self))]
    pub async fn assign_shipment(
        &self,
        id: PackingSlipId,
        shipment: ShipmentId,
    ) -> Result<(), PackingSlipError> {
        debug!("Sending request");
        match self.act(id, PackingSlipAction::AssignShipment(shipment)).await? {
            PackingSlipActionResult::AssignShipment(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    /// Returns whether the slip was on `shipment` and has been released.
    #[instrument(skip(self))]
    pub async fn unassign_shipment(
        &self,
        id: PackingSlipId,
        shipment: ShipmentId,
    ) -> Result<bool, PackingSlipError> {
        debug!("Sending request");
        match self.act(id, PackingSlipAction::UnassignShipment(shipment)).await? {
            PackingSlipActionResult::UnassignShipment(released) => Ok(released),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn set_destination_code(
        &self,
        id: PackingSlipId,
        index: usize,
        code: u32,
    ) -> Result<(), PackingSlipError> {
        debug!("Sending request");
        match self
            .act(id, PackingSlipAction::SetDestinationCode { index, code })
            .await?
        {
            PackingSlipActionResult::SetDestinationCode(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    async fn act(
        &self,
        id: PackingSlipId,
        action: PackingSlipAction,
    ) -> Result<PackingSlipActionResult, PackingSlipError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(PackingSlipError::from)
    }
}

fn unexpected(result: PackingSlipActionResult) -> PackingSlipError {
    PackingSlipError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}

#[async_trait]
impl ActorClient<PackingSlip> for PackingSlipClient {
    type Error = PackingSlipError;

    fn inner(&self) -> &ResourceClient<PackingSlip> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_create, expect_list};
    use crate::framework::Page;
    use crate::model::{Destination, PackingSlipItemCreate, WorkOrderId};

    fn new_slip(label: Option<&str>) -> NewPackingSlip {
        NewPackingSlip {
            customer: "acme".into(),
            label: label.map(String::from),
            destination: Destination::Customer,
            items: vec![PackingSlipItemCreate {
                work_order: WorkOrderId(1),
                line: 1,
                quantity: 5,
            }],
        }
    }

    #[tokio::test]
    async fn test_generated_label_skips_taken_numbers() {
        let (inner, mut receiver) = create_mock_client::<PackingSlip>(10);
        let client = PackingSlipClient::new(inner);

        let task = tokio::spawn(async move { client.create_packing_slip(new_slip(None)).await });

        let (_, responder) = expect_list(&mut receiver).await.expect("Expected List request");
        responder.send(Ok(Page::empty())).unwrap();

        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Create");
        assert_eq!(params.label, "ACME-PS001");
        responder
            .send(Err(FrameworkError::Conflict("ACME/ACME-PS001".into())))
            .unwrap();

        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Create");
        assert_eq!(params.label, "ACME-PS002");
        responder.send(Ok(PackingSlipId(9))).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), PackingSlipId(9));
    }

    #[tokio::test]
    async fn test_explicit_label_conflict_is_not_retried() {
        let (inner, mut receiver) = create_mock_client::<PackingSlip>(10);
        let client = PackingSlipClient::new(inner);

        let task =
            tokio::spawn(async move { client.create_packing_slip(new_slip(Some("RUSH-1"))).await });

        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Create");
        assert_eq!(params.label, "RUSH-1");
        responder
            .send(Err(FrameworkError::Conflict("ACME/RUSH-1".into())))
            .unwrap();

        let err = task.await.unwrap().unwrap_err();
        assert_eq!(err, PackingSlipError::AlreadyExists("ACME/RUSH-1".into()));
    }
}
