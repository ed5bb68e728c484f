use shopfloor::config::ShopConfig;
use shopfloor::error::HttpStatus;
use shopfloor::framework::ActorClient;
use shopfloor::job_actor::JobError;
use shopfloor::lifecycle::{ShopSystem, SystemError};
use shopfloor::lot_actor::LotError;
use shopfloor::model::*;
use shopfloor::packing_slip_actor::PackingSlipError;
use shopfloor::queries::{self, QueryError, ShipmentSearch};
use shopfloor::sequencing::SequenceError;
use shopfloor::shipment_actor::ShipmentError;
use shopfloor::user_actor::UserError;
use shopfloor::work_order_actor::WorkOrderError;
use shopfloor::workflows::{self, WorkflowError};

// =============================================================================
// FIXTURES
// =============================================================================

async fn catalog_step(system: &ShopSystem, category: &str, name: &str) -> RouteStepId {
    system
        .route_steps
        .create_step(RouteStepCreate {
            category: category.into(),
            name: name.into(),
            description: String::new(),
        })
        .await
        .unwrap()
}

async fn new_job(system: &ShopSystem, number: &str) -> JobId {
    system
        .jobs
        .create_job(JobCreate {
            job_number: number.into(),
            part_number: "BRK-7".into(),
            part_rev: "A".into(),
            quantity: 20,
            due_date: None,
        })
        .await
        .unwrap()
}

async fn new_lot(system: &ShopSystem, job: JobId, number: &str) -> Result<LotId, LotError> {
    system
        .lots
        .create_lot(LotCreate {
            job,
            number: number.into(),
            quantity: 5,
        })
        .await
}

fn insert(step: RouteStepId, insert_after: Option<usize>) -> InsertStepRequest {
    InsertStepRequest {
        step: Some(step),
        insert_after,
        description: None,
    }
}

/// A job whose router is Saw, Mill (from a template), with one lot.
async fn routed_job(system: &ShopSystem) -> (JobId, LotId, Vec<RouteStepId>) {
    let saw = catalog_step(system, "MACHINING", "Saw").await;
    let mill = catalog_step(system, "MACHINING", "Mill").await;
    let template = system
        .route_templates
        .create_template(RouteTemplateCreate {
            name: "Bracket".into(),
            description: String::new(),
            steps: vec![TemplateStep::new(saw), TemplateStep::new(mill)],
        })
        .await
        .unwrap();
    let job = new_job(system, "J-100").await;
    let imported = workflows::import_template_into_job(
        &system.route_templates,
        &system.route_steps,
        &system.jobs,
        template,
        job,
    )
    .await
    .unwrap();
    assert_eq!(imported, 2);
    let lot = new_lot(system, job, "1").await.unwrap();
    (job, lot, vec![saw, mill])
}

fn order_item(part: &str, quantity: u32, router: Option<Router>) -> WorkOrderItemCreate {
    WorkOrderItemCreate {
        part_number: part.into(),
        part_rev: "A".into(),
        description: format!("{part} part"),
        quantity,
        router,
    }
}

async fn work_order(system: &ShopSystem, number: &str, items: Vec<WorkOrderItemCreate>) -> WorkOrderId {
    system
        .work_orders
        .create_work_order(WorkOrderCreate {
            order_number: number.into(),
            customer: "acme".into(),
            items,
        })
        .await
        .unwrap()
}

fn slip(
    label: Option<&str>,
    destination: Destination,
    lines: &[(WorkOrderId, u32, u32)],
) -> NewPackingSlip {
    NewPackingSlip {
        customer: "acme".into(),
        label: label.map(str::to_string),
        destination,
        items: lines
            .iter()
            .map(|&(work_order, line, quantity)| PackingSlipItemCreate {
                work_order,
                line,
                quantity,
            })
            .collect(),
    }
}

fn pickup(slips: Vec<PackingSlipId>) -> NewShipment {
    NewShipment {
        customer: "acme".into(),
        label: None,
        packing_slips: slips,
        delivery: DeliveryDetails {
            delivery_method: DeliveryMethod::Pickup,
            ..DeliveryDetails::default()
        },
    }
}

// =============================================================================
// ROUTERS AND STEP CODES
// =============================================================================

#[tokio::test]
async fn test_step_codes_through_release() {
    let system = ShopSystem::new();
    let (job, lot, steps) = routed_job(&system).await;
    let deburr = catalog_step(&system, "FINISHING", "Deburr").await;

    // Before release: seeded from the job router, ordered by position only.
    let inserted = system.lots.insert_step(lot, insert(deburr, Some(1))).await.unwrap();
    assert_eq!(inserted.index, 2);
    assert_eq!(inserted.step_code, None);
    let router = system.lots.require(lot).await.unwrap().special_router.unwrap();
    assert_eq!(router.steps[0].step, steps[0]);
    assert_eq!(router.step_codes(), vec![None, None, None]);

    let summary = system.release_job(job).await.unwrap();
    assert_eq!(summary.lots, 1);
    assert_eq!(summary.lot_steps_coded, 3);
    let job_router = system.jobs.require(job).await.unwrap().router;
    assert_eq!(job_router.step_codes(), vec![Some(100), Some(200)]);
    let router = system.lots.require(lot).await.unwrap().special_router.unwrap();
    assert_eq!(router.step_codes(), vec![Some(100), Some(200), Some(300)]);

    // After release: midpoint, append and front insertions.
    let between = system.lots.insert_step(lot, insert(deburr, Some(0))).await.unwrap();
    assert_eq!(between.step_code, Some(150));
    let appended = system.lots.insert_step(lot, insert(deburr, Some(3))).await.unwrap();
    assert_eq!(appended.step_code, Some(400));
    let front = system.lots.insert_step(lot, insert(deburr, None)).await.unwrap();
    assert_eq!(front.step_code, Some(50));

    let router = system.lots.require(lot).await.unwrap().special_router.unwrap();
    assert_eq!(
        router.step_codes(),
        vec![Some(50), Some(100), Some(150), Some(200), Some(300), Some(400)]
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_job_router_insertion_after_release() {
    let system = ShopSystem::new();
    let (job, _lot, _steps) = routed_job(&system).await;
    let deburr = catalog_step(&system, "FINISHING", "Deburr").await;
    system.release_job(job).await.unwrap();

    let inserted = workflows::insert_job_step(
        &system.route_steps,
        &system.jobs,
        job,
        insert(deburr, Some(0)),
    )
    .await
    .unwrap();
    assert_eq!(inserted.step_code, Some(150));

    let err = workflows::insert_job_step(
        &system.route_steps,
        &system.jobs,
        job,
        InsertStepRequest::default(),
    )
    .await
    .unwrap_err();
    assert_eq!(err, WorkflowError::MissingField("step"));
    assert_eq!(err.status_code(), 400);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_step_insertion_errors() {
    let system = ShopSystem::new();
    let (_job, lot, steps) = routed_job(&system).await;

    let err = system
        .lots
        .insert_step(lot, InsertStepRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);

    let err = system
        .lots
        .insert_step(lot, insert(RouteStepId(99), None))
        .await
        .unwrap_err();
    assert_eq!(err, LotError::StepNotFound("route_step_99".into()));
    assert_eq!(err.status_code(), 404);

    let err = system
        .lots
        .insert_step(LotId(99), insert(steps[0], None))
        .await
        .unwrap_err();
    assert_eq!(err, LotError::NotFound("lot_99".into()));
    assert_eq!(err.status_code(), 404);

    let err = system
        .lots
        .insert_step(lot, insert(steps[0], Some(7)))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        LotError::Sequence(SequenceError::PositionOutOfRange { position: 8, len: 2 })
    );
    assert_eq!(err.status_code(), 400);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_exhausted_step_codes_are_a_conflict() {
    let config = ShopConfig {
        step_code_increment: 2,
        ..ShopConfig::default()
    };
    let system = ShopSystem::with_config(config);
    let (job, lot, steps) = routed_job(&system).await;
    system.release_job(job).await.unwrap();

    let router = system.jobs.require(job).await.unwrap().router;
    assert_eq!(router.step_codes(), vec![Some(2), Some(4)]);

    let inserted = system.lots.insert_step(lot, insert(steps[0], Some(0))).await.unwrap();
    assert_eq!(inserted.step_code, Some(3));

    let err = system
        .lots
        .insert_step(lot, insert(steps[0], Some(0)))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        LotError::Sequence(SequenceError::CodesExhausted { before: 2, after: 3 })
    );
    assert_eq!(err.status_code(), 409);

    // The failed insertion left the router untouched.
    let router = system.lots.require(lot).await.unwrap().special_router.unwrap();
    assert_eq!(router.step_codes(), vec![Some(2), Some(3), Some(4)]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_scrap_increments_revision_until_release() {
    let system = ShopSystem::new();
    let (job, lot, _steps) = routed_job(&system).await;

    assert_eq!(system.lots.scrap(lot).await.unwrap(), "A");
    assert_eq!(system.lots.scrap(lot).await.unwrap(), "B");

    system.release_job(job).await.unwrap();
    let err = system.lots.scrap(lot).await.unwrap_err();
    assert_eq!(err.status_code(), 405);
    assert_eq!(err.public_message(), "Job already released");
    assert_eq!(system.lots.require(lot).await.unwrap().rev.as_deref(), Some("B"));

    system.shutdown().await.unwrap();
}

// =============================================================================
// JOB LIFECYCLE
// =============================================================================

#[tokio::test]
async fn test_job_transitions() {
    let system = ShopSystem::new();
    let (job, _lot, _steps) = routed_job(&system).await;

    system.jobs.hold(job).await.unwrap();
    let err = system.release_job(job).await.unwrap_err();
    assert_eq!(err, WorkflowError::Job(JobError::OnHold));
    assert_eq!(err.status_code(), 405);

    system.jobs.resume(job).await.unwrap();
    let err = system.jobs.resume(job).await.unwrap_err();
    assert_eq!(err, JobError::NotOnHold);

    system.release_job(job).await.unwrap();
    let err = system.release_job(job).await.unwrap_err();
    assert_eq!(err.status_code(), 405);

    let err = system
        .jobs
        .update_job(
            job,
            JobUpdate {
                quantity: Some(30),
                ..JobUpdate::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, JobError::AlreadyReleased);

    let err = system.jobs.remove_step(job, 0).await.unwrap_err();
    assert_eq!(err, JobError::AlreadyReleased);

    let template = system
        .route_templates
        .create_template(RouteTemplateCreate {
            name: "Empty".into(),
            description: String::new(),
            steps: vec![],
        })
        .await
        .unwrap();
    let err = workflows::import_template_into_job(
        &system.route_templates,
        &system.route_steps,
        &system.jobs,
        template,
        job,
    )
    .await
    .unwrap_err();
    assert_eq!(err.status_code(), 405);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cancelled_job_refuses_new_lots() {
    let system = ShopSystem::new();
    let job = new_job(&system, "J-200").await;
    let first = new_lot(&system, job, "1").await.unwrap();

    let err = new_lot(&system, job, "1").await.unwrap_err();
    assert_eq!(err.status_code(), 409);

    system.jobs.cancel(job).await.unwrap();
    let err = new_lot(&system, job, "2").await.unwrap_err();
    assert_eq!(err, LotError::JobCancelled);
    assert_eq!(err.status_code(), 405);

    let lots = system.lots.lots_of_job(job).await.unwrap();
    assert_eq!(lots.len(), 1);
    assert_eq!(lots[0].id, first);
    assert_eq!(system.jobs.require(job).await.unwrap().lots, vec![first]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_duplicate_job_number_is_a_conflict() {
    let system = ShopSystem::new();
    new_job(&system, "J-300").await;

    let err = system
        .jobs
        .create_job(JobCreate {
            job_number: "j-300".into(),
            part_number: "BRK-9".into(),
            part_rev: "A".into(),
            quantity: 1,
            due_date: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, JobError::AlreadyExists(_)));
    assert_eq!(err.status_code(), 409);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_job_with_lots_cannot_be_deleted() {
    let system = ShopSystem::new();
    let job = new_job(&system, "J-500").await;
    let lot = new_lot(&system, job, "1").await.unwrap();

    let err = system.jobs.delete(job).await.unwrap_err();
    assert_eq!(err, JobError::HasLots(1));
    assert_eq!(err.status_code(), 405);
    assert!(system.jobs.get(job).await.unwrap().is_some());

    // The lot still resolves its job, so it can be removed, then the job.
    system.lots.delete(lot).await.unwrap();
    system.jobs.delete(job).await.unwrap();
    assert!(system.jobs.get(job).await.unwrap().is_none());
    assert!(system.lots.get(lot).await.unwrap().is_none());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_deleting_lot_detaches_it_from_job() {
    let system = ShopSystem::new();
    let job = new_job(&system, "J-400").await;
    let lot = new_lot(&system, job, "1").await.unwrap();

    system.lots.delete(lot).await.unwrap();
    assert!(system.jobs.require(job).await.unwrap().lots.is_empty());

    system.shutdown().await.unwrap();
}

// =============================================================================
// PACKING SLIPS AND SHIPMENTS
// =============================================================================

#[tokio::test]
async fn test_generated_packing_slip_labels() {
    let system = ShopSystem::new();
    let order = work_order(&system, "PO-1", vec![order_item("BRK", 10, None)]).await;

    let first = system
        .packing_slips
        .create_packing_slip(slip(None, Destination::Customer, &[(order, 1, 2)]))
        .await
        .unwrap();
    // Takes the number the next generated label would use.
    system
        .packing_slips
        .create_packing_slip(slip(Some("ACME-PS003"), Destination::Customer, &[(order, 1, 2)]))
        .await
        .unwrap();
    let third = system
        .packing_slips
        .create_packing_slip(slip(None, Destination::Customer, &[(order, 1, 2)]))
        .await
        .unwrap();

    assert_eq!(system.packing_slips.require(first).await.unwrap().label, "ACME-PS001");
    assert_eq!(system.packing_slips.require(third).await.unwrap().label, "ACME-PS004");

    let err = system
        .packing_slips
        .create_packing_slip(slip(Some("acme-ps001"), Destination::Customer, &[(order, 1, 1)]))
        .await
        .unwrap_err();
    assert!(matches!(err, PackingSlipError::AlreadyExists(_)));
    assert_eq!(err.status_code(), 409);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_packing_slip_line_validation() {
    let system = ShopSystem::new();
    let order = work_order(&system, "PO-2", vec![order_item("BRK", 10, None)]).await;

    let err = system
        .packing_slips
        .create_packing_slip(slip(None, Destination::Customer, &[(order, 5, 1)]))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);

    let err = system
        .packing_slips
        .create_packing_slip(slip(None, Destination::Customer, &[(WorkOrderId(42), 1, 1)]))
        .await
        .unwrap_err();
    assert_eq!(err, PackingSlipError::WorkOrderNotFound("work_order_42".into()));

    let err = system
        .packing_slips
        .create_packing_slip(slip(None, Destination::Customer, &[(order, 1, 0)]))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_shipment_owns_its_packing_slips() {
    let system = ShopSystem::new();
    let order = work_order(&system, "PO-3", vec![order_item("BRK", 10, None)]).await;
    let a = system
        .packing_slips
        .create_packing_slip(slip(None, Destination::Customer, &[(order, 1, 4)]))
        .await
        .unwrap();
    let b = system
        .packing_slips
        .create_packing_slip(slip(None, Destination::Customer, &[(order, 1, 4)]))
        .await
        .unwrap();

    let shipment = system.shipments.create_shipment(pickup(vec![a])).await.unwrap();
    assert_eq!(
        system.shipments.require(shipment).await.unwrap().label,
        "ACME-SH001"
    );

    // A shipped slip is frozen.
    let err = system
        .packing_slips
        .update_packing_slip(
            a,
            PackingSlipUpdate {
                destination: Some(Destination::Vendor),
                ..PackingSlipUpdate::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, PackingSlipError::AssignedToShipment(_)));
    assert_eq!(err.status_code(), 405);
    let err = system.packing_slips.delete(a).await.unwrap_err();
    assert_eq!(err.status_code(), 405);

    // Claiming a slip twice fails and rolls back the slips already assigned.
    let err = system.shipments.create_shipment(pickup(vec![b, a])).await.unwrap_err();
    assert!(matches!(err, ShipmentError::PackingSlipAlreadyShipped(_)));
    assert_eq!(err.status_code(), 409);
    assert_eq!(system.packing_slips.require(b).await.unwrap().shipment, None);
    assert_eq!(
        system.packing_slips.require(a).await.unwrap().shipment,
        Some(shipment)
    );

    // Deleting the shipment releases its slips.
    system.shipments.delete(shipment).await.unwrap();
    assert_eq!(system.packing_slips.require(a).await.unwrap().shipment, None);
    system.packing_slips.delete(a).await.unwrap();

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_shipment_edits_keep_history() {
    let system = ShopSystem::new();
    let order = work_order(&system, "PO-4", vec![order_item("BRK", 10, None)]).await;
    let a = system
        .packing_slips
        .create_packing_slip(slip(None, Destination::Customer, &[(order, 1, 4)]))
        .await
        .unwrap();
    let b = system
        .packing_slips
        .create_packing_slip(slip(None, Destination::Customer, &[(order, 1, 6)]))
        .await
        .unwrap();
    let shipment = system.shipments.create_shipment(pickup(vec![a])).await.unwrap();
    let original = system.shipments.require(shipment).await.unwrap();

    let edited = system
        .shipments
        .edit_shipment(
            shipment,
            ShipmentUpdate {
                packing_slips: Some(vec![b]),
                delivery: Some(DeliveryDetails {
                    delivery_method: DeliveryMethod::Carrier,
                    carrier: Some("UPS".into()),
                    tracking_number: Some("1Z999".into()),
                    ..DeliveryDetails::default()
                }),
            },
        )
        .await
        .unwrap();
    assert_eq!(edited.packing_slips, vec![b]);
    assert_eq!(system.packing_slips.require(a).await.unwrap().shipment, None);
    assert_eq!(
        system.packing_slips.require(b).await.unwrap().shipment,
        Some(shipment)
    );

    let history = queries::shipment_history(&system.shipments, shipment).await.unwrap();
    assert_eq!(history.len(), 1);
    let past = &history[0];
    assert!(past.is_past_version);
    assert_eq!(past.packing_slips, vec![a]);
    assert_eq!(past.delivery_method, DeliveryMethod::Pickup);
    assert_eq!(past.created_at, original.created_at);

    // Past versions are hidden from search and cannot be edited.
    let page = system
        .search_shipments(&ShipmentSearch {
            customer: Some("acme".into()),
            text: Some("1z9".into()),
            ..ShipmentSearch::default()
        })
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, shipment);

    let all = system
        .search_shipments(&ShipmentSearch {
            include_past_versions: true,
            ..ShipmentSearch::default()
        })
        .await
        .unwrap();
    assert_eq!(all.total, 2);

    let err = system
        .shipments
        .edit_shipment(past.id, ShipmentUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ShipmentError::PastVersion(_)));
    assert_eq!(err.status_code(), 405);

    let err = system
        .search_shipments(&ShipmentSearch {
            page: Some(0),
            ..ShipmentSearch::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err, QueryError::InvalidPage(0));
    assert_eq!(err.status_code(), 400);

    // A page far past the end is empty but still reports the match count.
    let beyond = system
        .search_shipments(&ShipmentSearch {
            page: Some(usize::MAX),
            page_size: Some(10),
            ..ShipmentSearch::default()
        })
        .await
        .unwrap();
    assert!(beyond.items.is_empty());
    assert_eq!(beyond.total, 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_carrier_shipments_need_a_carrier() {
    let system = ShopSystem::new();
    let err = system
        .shipments
        .create_shipment(NewShipment {
            delivery: DeliveryDetails::default(),
            ..pickup(vec![])
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ShipmentError::ValidationError(_)));
    assert_eq!(err.status_code(), 400);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_manifest_and_packing_queue() {
    let system = ShopSystem::new();
    let order = work_order(
        &system,
        "PO-5",
        vec![order_item("BRK", 10, None), order_item("PLT", 3, None)],
    )
    .await;
    let a = system
        .packing_slips
        .create_packing_slip(slip(None, Destination::Customer, &[(order, 1, 4), (order, 2, 3)]))
        .await
        .unwrap();
    let b = system
        .packing_slips
        .create_packing_slip(slip(None, Destination::Customer, &[(order, 1, 5)]))
        .await
        .unwrap();
    let shipment = system.shipments.create_shipment(pickup(vec![a, b])).await.unwrap();

    let manifest = system.shipment_manifest(shipment).await.unwrap();
    assert_eq!(manifest.customer, "ACME");
    assert_eq!(manifest.packing_slips.len(), 2);
    assert_eq!(manifest.packing_slips[0].total_quantity, 7);
    assert_eq!(manifest.packing_slips[1].total_quantity, 5);
    assert_eq!(manifest.total_quantity, 12);
    assert_eq!(manifest.packing_slips[0].lines[1].part_number, "PLT");
    assert_eq!(manifest.packing_slips[0].lines[0].order_number, "PO-5");

    let queue = system.packing_queue().await.unwrap();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].line, 1);
    assert_eq!(queue[0].ordered, 10);
    assert_eq!(queue[0].packed, 9);
    assert_eq!(queue[0].remaining, 1);

    let err = system.shipment_manifest(ShipmentId(77)).await.unwrap_err();
    assert_eq!(err.status_code(), 404);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_destination_code_backfill() {
    let system = ShopSystem::new();
    let coded = Router::new(vec![
        RouterStep::new(RouteStepId(1), "MACHINING", "Mill", "").with_code(100),
        RouterStep::new(RouteStepId(2), "OUTSOURCE", "Ship to Vendor", "anodize").with_code(200),
        RouterStep::new(RouteStepId(3), "SHIPPING", "Ship", "").with_code(300),
    ]);
    let two_vendors = Router::new(vec![
        RouterStep::new(RouteStepId(2), "OUTSOURCE", "Ship to Vendor", "plate").with_code(100),
        RouterStep::new(RouteStepId(2), "OUTSOURCE", "Ship to Vendor", "paint").with_code(200),
    ]);
    let uncoded = Router::new(vec![RouterStep::new(RouteStepId(1), "MACHINING", "Mill", "")]);
    let order = work_order(
        &system,
        "PO-6",
        vec![
            order_item("BRK", 10, Some(coded)),
            order_item("PLT", 10, None),
            order_item("RNG", 10, Some(two_vendors)),
            order_item("PIN", 10, Some(uncoded)),
        ],
    )
    .await;

    let customer = system
        .packing_slips
        .create_packing_slip(slip(
            None,
            Destination::Customer,
            &[(order, 1, 1), (order, 2, 1), (order, 4, 1)],
        ))
        .await
        .unwrap();
    let vendor = system
        .packing_slips
        .create_packing_slip(slip(None, Destination::Vendor, &[(order, 1, 1), (order, 3, 1)]))
        .await
        .unwrap();

    let report = system.backfill_destination_codes().await.unwrap();
    assert_eq!(report.slips_scanned, 2);
    assert_eq!(report.lines_scanned, 5);
    assert_eq!(report.updated, 3);
    assert_eq!(report.ambiguous, 1);
    assert_eq!(report.unresolved, 1);

    let codes = |slip: PackingSlip| -> Vec<Option<u32>> {
        slip.items.iter().map(|i| i.destination_code).collect()
    };
    assert_eq!(
        codes(system.packing_slips.require(customer).await.unwrap()),
        vec![Some(300), Some(0), None]
    );
    assert_eq!(
        codes(system.packing_slips.require(vendor).await.unwrap()),
        vec![Some(200), None]
    );

    // Coded lines are skipped on a second run.
    let again = system.backfill_destination_codes().await.unwrap();
    assert_eq!(again.updated, 0);
    assert_eq!(again.already_coded, 3);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_work_orders_cannot_be_deleted() {
    let system = ShopSystem::new();
    let order = work_order(&system, "PO-7", vec![order_item("BRK", 1, None)]).await;

    let err = system.work_orders.delete(order).await.unwrap_err();
    assert_eq!(err, WorkOrderError::DeleteForbidden);
    assert_eq!(err.status_code(), 405);

    let line = system
        .work_orders
        .add_item(order, order_item("PLT", 2, None))
        .await
        .unwrap();
    assert_eq!(line, 2);
    let err = system.work_orders.set_item_quantity(order, 9, 1).await.unwrap_err();
    assert_eq!(err.status_code(), 404);

    system.shutdown().await.unwrap();
}

// =============================================================================
// INCOMING DELIVERIES
// =============================================================================

#[tokio::test]
async fn test_incoming_delivery_receiving() {
    let system = ShopSystem::new();
    let order = work_order(&system, "PO-8", vec![order_item("BRK", 10, None)]).await;
    let a = system
        .packing_slips
        .create_packing_slip(slip(None, Destination::Vendor, &[(order, 1, 10)]))
        .await
        .unwrap();
    let shipment = system.shipments.create_shipment(pickup(vec![a])).await.unwrap();

    let err = system
        .incoming_deliveries
        .create_delivery(IncomingDeliveryCreate {
            label: "IN-0".into(),
            source_shipment: Some(ShipmentId(99)),
            po_number: None,
            expected_date: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);

    let undated = system
        .incoming_deliveries
        .create_delivery(IncomingDeliveryCreate {
            label: "IN-1".into(),
            source_shipment: Some(shipment),
            po_number: Some("V-1".into()),
            expected_date: None,
        })
        .await
        .unwrap();
    let dated = system
        .incoming_deliveries
        .create_delivery(IncomingDeliveryCreate {
            label: "IN-2".into(),
            source_shipment: None,
            po_number: None,
            expected_date: chrono::NaiveDate::from_ymd_opt(2026, 3, 1),
        })
        .await
        .unwrap();

    let queue = queries::incoming_queue(&system.incoming_deliveries).await.unwrap();
    let ids: Vec<_> = queue.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![dated, undated]);

    let lines = vec![ReceivedLine {
        line: LineRef {
            work_order: order,
            line: 1,
        },
        quantity: 10,
    }];
    system.incoming_deliveries.receive(undated, lines.clone()).await.unwrap();
    let err = system
        .incoming_deliveries
        .receive(undated, lines)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 405);

    let queue = queries::incoming_queue(&system.incoming_deliveries).await.unwrap();
    assert_eq!(queue.len(), 1);

    system.incoming_deliveries.undo_receive(undated).await.unwrap();
    let delivery = system.incoming_deliveries.require(undated).await.unwrap();
    assert!(!delivery.is_received());
    assert!(delivery.received.is_empty());
    let err = system.incoming_deliveries.undo_receive(undated).await.unwrap_err();
    assert_eq!(err.status_code(), 405);

    system.shutdown().await.unwrap();
}

// =============================================================================
// SITES, USERS AND SYSTEM
// =============================================================================

#[tokio::test]
async fn test_user_registration() {
    let system = ShopSystem::new();
    let site = system
        .sites
        .create_site(SiteCreate {
            name: "Plant 1".into(),
            location: "Dayton".into(),
            timezone: "America/New_York".into(),
        })
        .await
        .unwrap();

    let user = system
        .users
        .create_user(UserCreate {
            email: "Pat@Example.com".into(),
            name: "Pat".into(),
            site: Some(site),
        })
        .await
        .unwrap();
    let found = system.users.find_by_email("pat@example.com").await.unwrap().unwrap();
    assert_eq!(found.id, user);
    assert!(found.is_active);
    assert!(!found.is_admin);
    assert_eq!(system.users.users_at_site(site).await.unwrap().len(), 1);

    let err = system
        .users
        .create_user(UserCreate {
            email: "pat@example.com".into(),
            name: "Other Pat".into(),
            site: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, UserError::AlreadyExists(_)));
    assert_eq!(err.status_code(), 409);

    let err = system
        .users
        .create_user(UserCreate {
            email: "sam@example.com".into(),
            name: "Sam".into(),
            site: Some(SiteId(9)),
        })
        .await
        .unwrap_err();
    assert_eq!(err, UserError::SiteNotFound("site_9".into()));
    assert_eq!(err.status_code(), 404);

    let err = system
        .users
        .create_user(UserCreate {
            email: "not-an-email".into(),
            name: "Sam".into(),
            site: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reset_requires_configuration() {
    let system = ShopSystem::new();
    new_job(&system, "J-1").await;
    let err = system.reset().await.unwrap_err();
    assert_eq!(err, SystemError::ResetDisabled);
    assert_eq!(err.status_code(), 405);
    system.shutdown().await.unwrap();

    let system = ShopSystem::with_config(ShopConfig {
        allow_reset: true,
        ..ShopConfig::default()
    });
    let (_job, _lot, _steps) = routed_job(&system).await;
    // Two catalog steps, one template, one job, one lot.
    assert_eq!(system.reset().await.unwrap(), 5);
    assert!(system.jobs.get(JobId(1)).await.unwrap().is_none());
    system.shutdown().await.unwrap();
}
