//! Demo run: a job through release and a lot insertion, then an order
//! packed, shipped and printed as a manifest.

use shopfloor::config::ShopConfig;
use shopfloor::lifecycle::{setup_tracing, ShopSystem};
use shopfloor::model::{
    DeliveryDetails, DeliveryMethod, Destination, InsertStepRequest, JobCreate, LotCreate,
    NewPackingSlip, NewShipment, PackingSlipItemCreate, RouteStepCreate, RouteTemplateCreate,
    TemplateStep, WorkOrderCreate, WorkOrderItemCreate,
};
use shopfloor::workflows;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = ShopConfig::load().map_err(|e| e.to_string())?;
    setup_tracing(config.log_format);

    info!("Starting shop system");
    let system = ShopSystem::with_config(config);

    let span = tracing::info_span!("routing");
    async {
        let mut steps = Vec::new();
        for (category, name) in [("MACHINING", "Saw"), ("MACHINING", "Mill"), ("SHIPPING", "Ship")] {
            let id = system
                .route_steps
                .create_step(RouteStepCreate {
                    category: category.into(),
                    name: name.into(),
                    description: String::new(),
                })
                .await
                .map_err(|e| e.to_string())?;
            steps.push(id);
        }
        let deburr = system
            .route_steps
            .create_step(RouteStepCreate {
                category: "FINISHING".into(),
                name: "Deburr".into(),
                description: "break all edges".into(),
            })
            .await
            .map_err(|e| e.to_string())?;

        let template = system
            .route_templates
            .create_template(RouteTemplateCreate {
                name: "Bracket".into(),
                description: "saw, mill, ship".into(),
                steps: steps.iter().copied().map(TemplateStep::new).collect(),
            })
            .await
            .map_err(|e| e.to_string())?;

        let job = system
            .jobs
            .create_job(JobCreate {
                job_number: "J-1001".into(),
                part_number: "BRK-7".into(),
                part_rev: "C".into(),
                quantity: 20,
                due_date: None,
            })
            .await
            .map_err(|e| e.to_string())?;
        workflows::import_template_into_job(
            &system.route_templates,
            &system.route_steps,
            &system.jobs,
            template,
            job,
        )
        .await
        .map_err(|e| e.to_string())?;

        let lot = system
            .lots
            .create_lot(LotCreate {
                job,
                number: "1".into(),
                quantity: 10,
            })
            .await
            .map_err(|e| e.to_string())?;
        system
            .lots
            .insert_step(
                lot,
                InsertStepRequest {
                    step: Some(steps[0]),
                    insert_after: None,
                    description: Some("re-cut".into()),
                },
            )
            .await
            .map_err(|e| e.to_string())?;

        let summary = system.release_job(job).await.map_err(|e| e.to_string())?;
        info!(?summary, "Released");

        let inserted = system
            .lots
            .insert_step(
                lot,
                InsertStepRequest {
                    step: Some(deburr),
                    insert_after: Some(0),
                    description: None,
                },
            )
            .await
            .map_err(|e| e.to_string())?;
        info!(index = inserted.index, step_code = ?inserted.step_code, "Inserted after release");
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("shipping");
    let manifest = async {
        let order = system
            .work_orders
            .create_work_order(WorkOrderCreate {
                order_number: "PO-552".into(),
                customer: "acme".into(),
                items: vec![WorkOrderItemCreate {
                    part_number: "BRK-7".into(),
                    part_rev: "C".into(),
                    description: "Mounting bracket".into(),
                    quantity: 20,
                    router: None,
                }],
            })
            .await
            .map_err(|e| e.to_string())?;
        let slip = system
            .packing_slips
            .create_packing_slip(NewPackingSlip {
                customer: "acme".into(),
                label: None,
                destination: Destination::Customer,
                items: vec![PackingSlipItemCreate {
                    work_order: order,
                    line: 1,
                    quantity: 12,
                }],
            })
            .await
            .map_err(|e| e.to_string())?;
        let shipment = system
            .shipments
            .create_shipment(NewShipment {
                customer: "acme".into(),
                label: None,
                packing_slips: vec![slip],
                delivery: DeliveryDetails {
                    delivery_method: DeliveryMethod::Carrier,
                    carrier: Some("UPS".into()),
                    ..DeliveryDetails::default()
                },
            })
            .await
            .map_err(|e| e.to_string())?;

        let report = system
            .backfill_destination_codes()
            .await
            .map_err(|e| e.to_string())?;
        info!(?report, "Destination codes backfilled");

        let queue = system.packing_queue().await.map_err(|e| e.to_string())?;
        info!(remaining = queue.iter().map(|e| e.remaining).sum::<u32>(), "Packing queue");

        system
            .shipment_manifest(shipment)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    let rendered = serde_json::to_string_pretty(&manifest).map_err(|e| e.to_string())?;
    println!("{rendered}");

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
