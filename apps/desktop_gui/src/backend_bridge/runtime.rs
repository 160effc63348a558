//! Backend worker: a dedicated thread with a tokio runtime that drains UI
//! commands and drives the POS HTTP client, reporting back as UI events.

use client_core::PosClient;
use crossbeam_channel::{Receiver, Sender};
use tracing::warn;
use url::Url;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(base_url: Url, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("failed to build backend runtime: {err}"),
                )));
                return;
            }
        };

        let client = PosClient::new(base_url);

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                handle_command(&client, cmd, &ui_tx).await;
            }
        });
    });
}

async fn handle_command(client: &PosClient, cmd: BackendCommand, ui_tx: &Sender<UiEvent>) {
    match cmd {
        BackendCommand::UpdateStatus { order_id, status } => {
            match client.update_status(order_id, &status).await {
                Ok(Some(_)) => {
                    let _ = ui_tx.try_send(UiEvent::OrderStatusUpdated { order_id, status });
                }
                // placeholder selection: no navigation happened
                Ok(None) => {}
                Err(err) => {
                    warn!(order_id = order_id.0, %err, "status update failed");
                    let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                        UiErrorContext::UpdateStatus,
                        err.to_string(),
                    )));
                }
            }
        }
        BackendCommand::ApplyOrderFilters {
            current_url,
            status,
            order_type,
        } => match client
            .apply_order_filters(&current_url, &status, &order_type)
            .await
        {
            Ok(url) => {
                let _ = ui_tx.try_send(UiEvent::FiltersApplied { url });
            }
            Err(err) => {
                warn!(%err, "filter navigation failed");
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::ApplyFilters,
                    err.to_string(),
                )));
            }
        },
        BackendCommand::PlaceOrder { form, total } => match client.place_order(&form).await {
            Ok(()) => {
                let _ = ui_tx.try_send(UiEvent::OrderPlaced { form, total });
            }
            Err(err) => {
                warn!(%err, "order submission failed");
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::PlaceOrder,
                    err.to_string(),
                )));
            }
        },
        BackendCommand::DeleteOrder { order_id } => match client.delete_order(order_id).await {
            Ok(()) => {
                let _ = ui_tx.try_send(UiEvent::OrderDeleted { order_id });
            }
            Err(err) => {
                warn!(order_id = order_id.0, %err, "order delete failed");
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::DeleteOrder,
                    err.to_string(),
                )));
            }
        },
        BackendCommand::DeleteCustomer { customer_id } => {
            match client.delete_customer(customer_id).await {
                Ok(()) => {
                    let _ = ui_tx.try_send(UiEvent::CustomerDeleted { customer_id });
                }
                Err(err) => {
                    warn!(customer_id = customer_id.0, %err, "customer delete failed");
                    let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                        UiErrorContext::DeleteCustomer,
                        err.to_string(),
                    )));
                }
            }
        }
    }
}
