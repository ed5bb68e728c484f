use crate::clients::{
    IncomingDeliveryClient, JobClient, LotClient, PackingSlipClient, RouteStepClient,
    RouteTemplateClient, ShipmentClient, SiteClient, UserClient, WorkOrderClient,
};
use crate::config::ShopConfig;
use crate::error::{HttpStatus, INTERNAL_ERROR, METHOD_NOT_ALLOWED};
use crate::framework::{ActorClient, FrameworkError, Page};
use crate::job_actor::RouterSettings;
use crate::lot_actor::LotContext;
use crate::model::{JobId, Shipment, ShipmentId};
use crate::queries::{
    self, PackingQueueEntry, PageSettings, QueryError, ShipmentManifest, ShipmentSearch,
};
use crate::workflows::{self, MigrationReport, ReleaseSummary, WorkflowError};
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SystemError {
    #[error("Reset is disabled")]
    ResetDisabled,

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for SystemError {
    fn from(e: FrameworkError) -> Self {
        SystemError::ActorCommunicationError(e.to_string())
    }
}

impl HttpStatus for SystemError {
    fn status_code(&self) -> u16 {
        match self {
            SystemError::ResetDisabled => METHOD_NOT_ALLOWED,
            SystemError::ActorCommunicationError(_) => INTERNAL_ERROR,
        }
    }
}

/// The runtime that owns every collection actor.
///
/// `ShopSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the actors
/// - **Dependency Wiring**: handing each actor the clients it depends on
/// - **Configuration**: mailbox sizes, step-code increment, label retries
///
/// # Dependency graph
///
/// ```text
/// User ──► Site            PackingSlip ──► WorkOrder
/// RouteTemplate ──► RouteStep   Shipment ──► PackingSlip
/// Lot ──► Job, RouteStep   IncomingDelivery ──► Shipment
/// ```
///
/// The graph is acyclic, so dropping the clients shuts the actors down
/// from the leaves inward.
///
/// # Example
///
/// ```ignore
/// let system = ShopSystem::new();
/// let job = system.jobs.create_job(job).await?;
/// let lot = system.lots.create_lot(LotCreate { job, number: "1".into(), quantity: 5 }).await?;
/// system.release_job(job).await?;
/// system.shutdown().await?;
/// ```
pub struct ShopSystem {
    pub sites: SiteClient,
    pub users: UserClient,
    pub route_steps: RouteStepClient,
    pub route_templates: RouteTemplateClient,
    pub work_orders: WorkOrderClient,
    pub packing_slips: PackingSlipClient,
    pub shipments: ShipmentClient,
    pub incoming_deliveries: IncomingDeliveryClient,
    pub jobs: JobClient,
    pub lots: LotClient,
    config: ShopConfig,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Default for ShopSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl ShopSystem {
    /// Starts every actor with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ShopConfig::default())
    }

    /// Starts every actor. Must be called inside a Tokio runtime.
    pub fn with_config(config: ShopConfig) -> Self {
        let size = config.mailbox_size;
        let settings = RouterSettings {
            step_code_increment: config.step_code_increment,
        };

        // 1. Create actors and wrap their clients
        let (site_actor, sites) = crate::site_actor::new(size);
        let (user_actor, users) = crate::user_actor::new(size);
        let (route_step_actor, route_steps) = crate::route_step_actor::new(size);
        let (route_template_actor, route_templates) = crate::route_template_actor::new(size);
        let (work_order_actor, work_orders) = crate::work_order_actor::new(size);
        let (packing_slip_actor, packing_slips) = crate::packing_slip_actor::new(size);
        let (shipment_actor, shipments) = crate::shipment_actor::new(size);
        let (incoming_actor, incoming_deliveries) = crate::incoming_delivery_actor::new(size);
        let (job_actor, jobs) = crate::job_actor::new(size);
        let (lot_actor, lots) = crate::lot_actor::new(size);

        let sites = SiteClient::new(sites);
        let users = UserClient::new(users);
        let route_steps = RouteStepClient::new(route_steps);
        let route_templates = RouteTemplateClient::new(route_templates);
        let work_orders = WorkOrderClient::new(work_orders);
        let packing_slips =
            PackingSlipClient::new(packing_slips).with_label_retry_limit(config.label_retry_limit);
        let shipments =
            ShipmentClient::new(shipments).with_label_retry_limit(config.label_retry_limit);
        let incoming_deliveries = IncomingDeliveryClient::new(incoming_deliveries);
        let jobs = JobClient::new(jobs);
        let lots = LotClient::new(lots);

        // 2. Start actors with injected context
        let handles = vec![
            tokio::spawn(site_actor.run(())),
            tokio::spawn(user_actor.run(sites.clone())),
            tokio::spawn(route_step_actor.run(())),
            tokio::spawn(route_template_actor.run(route_steps.clone())),
            tokio::spawn(work_order_actor.run(())),
            tokio::spawn(packing_slip_actor.run(work_orders.clone())),
            tokio::spawn(shipment_actor.run(packing_slips.clone())),
            tokio::spawn(incoming_actor.run(shipments.clone())),
            tokio::spawn(job_actor.run(settings)),
            tokio::spawn(lot_actor.run(LotContext {
                jobs: jobs.clone(),
                steps: route_steps.clone(),
                settings,
            })),
        ];
        info!(actors = handles.len(), "Shop system started");

        Self {
            sites,
            users,
            route_steps,
            route_templates,
            work_orders,
            packing_slips,
            shipments,
            incoming_deliveries,
            jobs,
            lots,
            config,
            handles,
        }
    }

    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    fn page_settings(&self) -> PageSettings {
        PageSettings {
            default_page_size: self.config.default_page_size,
            max_page_size: self.config.max_page_size,
        }
    }

    /// Releases a job and freezes the routers of its lots.
    pub async fn release_job(&self, job: JobId) -> Result<ReleaseSummary, WorkflowError> {
        workflows::release_job(&self.jobs, &self.lots, job).await
    }

    /// Codes every uncoded packing-slip line that can be inferred.
    pub async fn backfill_destination_codes(&self) -> Result<MigrationReport, WorkflowError> {
        workflows::backfill_destination_codes(
            &self.work_orders,
            &self.packing_slips,
            self.config.default_destination_code,
        )
        .await
    }

    pub async fn packing_queue(&self) -> Result<Vec<PackingQueueEntry>, QueryError> {
        queries::packing_queue(&self.work_orders, &self.packing_slips).await
    }

    pub async fn search_shipments(
        &self,
        search: &ShipmentSearch,
    ) -> Result<Page<Shipment>, QueryError> {
        queries::search_shipments(&self.shipments, search, self.page_settings()).await
    }

    pub async fn shipment_manifest(&self, id: ShipmentId) -> Result<ShipmentManifest, QueryError> {
        queries::shipment_manifest(&self.shipments, &self.packing_slips, &self.work_orders, id)
            .await
    }

    /// Empties every collection. Refused unless `allow_reset` is configured.
    pub async fn reset(&self) -> Result<usize, SystemError> {
        if !self.config.allow_reset {
            warn!("Reset requested while disabled");
            return Err(SystemError::ResetDisabled);
        }
        let cleared = self.incoming_deliveries.inner().clear().await?
            + self.shipments.inner().clear().await?
            + self.packing_slips.inner().clear().await?
            + self.work_orders.inner().clear().await?
            + self.lots.inner().clear().await?
            + self.jobs.inner().clear().await?
            + self.route_templates.inner().clear().await?
            + self.route_steps.inner().clear().await?
            + self.users.inner().clear().await?
            + self.sites.inner().clear().await?;
        info!(cleared, "Shop system reset");
        Ok(cleared)
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the channels; each actor drains its
    /// mailbox, drops its context (releasing its dependencies) and exits.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        let Self {
            sites,
            users,
            route_steps,
            route_templates,
            work_orders,
            packing_slips,
            shipments,
            incoming_deliveries,
            jobs,
            lots,
            handles,
            ..
        } = self;
        drop((sites, users, route_steps, route_templates, work_orders));
        drop((packing_slips, shipments, incoming_deliveries, jobs, lots));

        for handle in handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
