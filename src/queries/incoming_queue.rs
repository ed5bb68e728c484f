use super::QueryError;
use crate::clients::IncomingDeliveryClient;
use crate::framework::{ActorClient, Query};
use crate::model::IncomingDelivery;

/// Deliveries not yet received, soonest expected first; undated ones last.
pub async fn incoming_queue(
    deliveries: &IncomingDeliveryClient,
) -> Result<Vec<IncomingDelivery>, QueryError> {
    let mut pending = deliveries
        .list(Query::filter(|d: &IncomingDelivery| !d.is_received()))
        .await?
        .items;
    pending.sort_by_key(|d| (d.expected_date.is_none(), d.expected_date, d.id));
    Ok(pending)
}
