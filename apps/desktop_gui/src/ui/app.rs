use std::time::{Duration, Instant};

use chrono::Local;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use egui::RichText;
use serde::{Deserialize, Serialize};
use url::Url;

use client_core::OrderFormSubmission;
use shared::catalog::{sample_menu, sample_tables};
use shared::domain::{
    CustomerId, CustomerSummary, MenuItemId, OrderId, OrderRow, OrderStatus, OrderType,
    PaymentMethod, StatusFilter, TableStatus, TableSummary, TypeFilter,
};
use shared::money::format_inr;
use shared::timefmt::format_order_timestamp;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{err_label, UiEvent};
use crate::controller::flash::{FlashKind, FlashTray};
use crate::controller::form::{OrderFormState, OrderSummaryView, NEW_CUSTOMER_SENTINEL};
use crate::controller::menu::MenuBoard;
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::tabs::TabStrip;

pub const SETTINGS_STORAGE_KEY: &str = "pos_desktop_settings";

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub server_url: Url,
}

/// Filter and search state carried across sessions via eframe storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersistedPosSettings {
    pub status_filter: String,
    pub type_filter: String,
    pub menu_search: String,
}

pub struct PosGuiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    /// The orders-page URL the filter navigation rewrites.
    page_url: Url,
    tabs: TabStrip,
    menu: MenuBoard,
    menu_search: String,
    form: OrderFormState,
    summary: OrderSummaryView,
    orders: Vec<OrderRow>,
    customers: Vec<CustomerSummary>,
    tables: Vec<TableSummary>,
    status_filter: StatusFilter,
    type_filter: TypeFilter,
    /// Blocking alert raised by the submission guard; cleared on dismiss.
    alert: Option<String>,
    flashes: FlashTray,
    status_line: String,
    today_sales: f64,
    next_local_order_id: i64,
    next_local_customer_id: i64,
}

impl PosGuiApp {
    pub fn new(
        startup: StartupConfig,
        persisted: Option<PersistedPosSettings>,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        let mut menu = MenuBoard::from_catalog(&sample_menu());
        let mut menu_search = String::new();
        let mut status_filter = StatusFilter::All;
        let mut type_filter = TypeFilter::All;
        if let Some(settings) = persisted {
            if let Ok(parsed) = settings.status_filter.parse() {
                status_filter = parsed;
            }
            if let Ok(parsed) = settings.type_filter.parse() {
                type_filter = parsed;
            }
            menu_search = settings.menu_search;
            menu.apply_search(&menu_search);
        }

        // page load: establish correct initial derived state before any event
        let mut form = OrderFormState::default();
        form.toggle_customer_details();
        form.toggle_table_details();
        let summary = form.order_summary(&menu);

        Self {
            cmd_tx,
            ui_rx,
            page_url: startup.server_url,
            tabs: TabStrip::new([
                ("orders", "Orders"),
                ("new-order", "New Order"),
                ("menu", "Menu"),
                ("customers", "Customers"),
                ("tables", "Tables"),
            ]),
            menu,
            menu_search,
            form,
            summary,
            orders: Vec::new(),
            customers: Vec::new(),
            tables: sample_tables(),
            status_filter,
            type_filter,
            alert: None,
            flashes: FlashTray::default(),
            status_line: String::new(),
            today_sales: 0.0,
            next_local_order_id: 1,
            next_local_customer_id: 1,
        }
    }

    fn drain_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::OrderStatusUpdated { order_id, status } => {
                self.apply_status_update(order_id, &status);
                self.flashes
                    .push(FlashKind::Success, format!("Order status updated to {status}"));
            }
            UiEvent::FiltersApplied { url } => {
                self.page_url = url;
            }
            UiEvent::OrderPlaced { form, total } => {
                self.record_placed_order(form, total);
                self.form.reset();
                self.summary = self.form.order_summary(&self.menu);
                self.flashes
                    .push(FlashKind::Success, "Order placed successfully");
            }
            UiEvent::OrderDeleted { order_id } => {
                self.remove_order(order_id);
                self.flashes
                    .push(FlashKind::Success, "Order deleted successfully");
            }
            UiEvent::CustomerDeleted { customer_id } => {
                self.customers.retain(|c| c.id != customer_id);
                self.flashes
                    .push(FlashKind::Success, "Customer deleted successfully");
            }
            UiEvent::Error(err) => {
                tracing::warn!(context = ?err.context(), message = err.message(), "ui error event");
                self.flashes.push(
                    FlashKind::Error,
                    format!("{}: {}", err_label(err.category()), err.message()),
                );
            }
        }
    }

    fn apply_status_update(&mut self, order_id: OrderId, status: &str) {
        let Ok(new_status) = status.parse::<OrderStatus>() else {
            return;
        };
        let Some(row) = self.orders.iter_mut().find(|r| r.id == order_id) else {
            return;
        };
        let previous = row.status;
        row.status = new_status;
        let order_type = row.order_type;
        let table_number = row.table_number.clone();

        // mirror the server's table bookkeeping for dine-in orders
        if order_type == OrderType::DineIn {
            if let Some(table_number) = table_number {
                if new_status == OrderStatus::Completed {
                    self.set_table_status(&table_number, TableStatus::Available);
                } else if previous == OrderStatus::Completed {
                    self.set_table_status(&table_number, TableStatus::Occupied);
                }
            }
        }
    }

    fn record_placed_order(&mut self, form: OrderFormSubmission, total: f64) {
        let discounted = total - total * form.discount_percent / 100.0;
        self.today_sales += discounted;

        let customer_name = if form.customer_choice == NEW_CUSTOMER_SENTINEL {
            if !form.name.is_empty() && !form.phone.is_empty() {
                self.customers.push(CustomerSummary {
                    id: CustomerId(self.next_local_customer_id),
                    name: form.name.clone(),
                    phone: form.phone.clone(),
                    email: (!form.email.is_empty()).then(|| form.email.clone()),
                    address: (!form.address.is_empty()).then(|| form.address.clone()),
                });
                self.next_local_customer_id += 1;
            }
            form.name.clone()
        } else {
            self.customers
                .iter()
                .find(|c| c.id.0.to_string() == form.customer_choice)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| format!("Customer {}", form.customer_choice))
        };

        let items = form
            .items
            .iter()
            .filter_map(|id| self.menu.card(*id))
            .map(|card| format!("{} ({})", card.item.name, card.price_text))
            .collect::<Vec<_>>()
            .join(", ");

        let row = OrderRow {
            id: OrderId(self.next_local_order_id),
            customer_name,
            placed_at: format_order_timestamp(Local::now().naive_local()),
            total: discounted,
            payment: form.payment_method,
            status: OrderStatus::Pending,
            order_type: form.order_type,
            table_number: form.table_number.clone(),
            items,
        };
        self.next_local_order_id += 1;
        // newest first, as the index page orders by date descending
        self.orders.insert(0, row);

        if form.order_type == OrderType::DineIn {
            if let Some(table_number) = form.table_number {
                self.set_table_status(&table_number, TableStatus::Occupied);
            }
        }
    }

    fn remove_order(&mut self, order_id: OrderId) {
        let Some(idx) = self.orders.iter().position(|r| r.id == order_id) else {
            return;
        };
        let row = self.orders.remove(idx);
        if row.order_type == OrderType::DineIn {
            if let Some(table_number) = row.table_number {
                let still_active = self.orders.iter().any(|o| {
                    o.order_type == OrderType::DineIn
                        && o.table_number.as_deref() == Some(table_number.as_str())
                        && matches!(o.status, OrderStatus::Pending | OrderStatus::Preparing)
                });
                if !still_active {
                    self.set_table_status(&table_number, TableStatus::Available);
                }
            }
        }
    }

    fn set_table_status(&mut self, table_number: &str, status: TableStatus) {
        if let Some(table) = self
            .tables
            .iter_mut()
            .find(|t| t.table_number == table_number)
        {
            table.status = status;
        }
    }

    /// Queue a command for the backend worker; a full or disconnected queue
    /// degrades to a warning flash rather than a failure.
    fn dispatch(&mut self, cmd: BackendCommand) {
        let mut status = String::new();
        dispatch_backend_command(&self.cmd_tx, cmd, &mut status);
        if !status.is_empty() {
            self.flashes.push(FlashKind::Warning, status.clone());
            self.status_line = status;
        }
    }

    /// Submission guard: count checked items before anything leaves the app.
    fn submit_order(&mut self) {
        if let Err(alert) = self.form.validate_for_submit() {
            self.alert = Some(alert.to_string());
            return;
        }
        let total = self.form.order_total(&self.menu);
        let form = self.form.to_submission();
        self.dispatch(BackendCommand::PlaceOrder { form, total });
    }

    fn dispatch_filter_navigation(&mut self) {
        self.dispatch(BackendCommand::ApplyOrderFilters {
            current_url: self.page_url.clone(),
            status: self.status_filter.as_str().to_string(),
            order_type: self.type_filter.as_str().to_string(),
        });
    }

    fn filtered_orders(&self) -> Vec<&OrderRow> {
        self.orders
            .iter()
            .filter(|row| {
                self.status_filter.admits(row.status) && self.type_filter.admits(row.order_type)
            })
            .collect()
    }

    fn pending_orders(&self) -> usize {
        self.orders
            .iter()
            .filter(|r| r.status == OrderStatus::Pending)
            .count()
    }

    fn available_tables(&self) -> usize {
        self.tables
            .iter()
            .filter(|t| t.status == TableStatus::Available)
            .count()
    }

    fn render_nav(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Restaurant POS");
            ui.separator();
            let mut clicked = None;
            for (idx, tab) in self.tabs.nav().iter().enumerate() {
                if ui.selectable_label(tab.active, &tab.label).clicked() {
                    clicked = Some((tab.id.clone(), idx));
                }
            }
            if let Some((id, idx)) = clicked {
                self.tabs.switch_to(&id, idx);
            }
        });
    }

    fn render_flashes(&mut self, ui: &mut egui::Ui) {
        let now = Instant::now();
        for message in self.flashes.iter() {
            let color = match message.kind {
                FlashKind::Success => egui::Color32::from_rgb(0x28, 0xa7, 0x45),
                FlashKind::Warning => egui::Color32::from_rgb(0xcc, 0x8a, 0x00),
                FlashKind::Error => egui::Color32::from_rgb(0xc0, 0x2b, 0x2b),
            };
            ui.scope(|ui| {
                ui.set_opacity(message.opacity_at(now));
                ui.label(RichText::new(&message.text).color(color));
            });
        }
    }

    fn render_orders_tab(&mut self, ui: &mut egui::Ui) {
        ui.label(format!(
            "Pending orders: {}   Available tables: {}   Today's sales: {}",
            self.pending_orders(),
            self.available_tables(),
            format_inr(self.today_sales)
        ));
        ui.separator();

        ui.horizontal(|ui| {
            egui::ComboBox::from_label("Status")
                .selected_text(self.status_filter.as_str())
                .show_ui(ui, |ui| {
                    for value in StatusFilter::ALL_VALUES {
                        ui.selectable_value(&mut self.status_filter, value, value.as_str());
                    }
                });
            egui::ComboBox::from_label("Order type")
                .selected_text(self.type_filter.as_str())
                .show_ui(ui, |ui| {
                    for value in TypeFilter::ALL_VALUES {
                        ui.selectable_value(&mut self.type_filter, value, value.as_str());
                    }
                });
            if ui.button("Apply filters").clicked() {
                self.dispatch_filter_navigation();
            }
        });
        ui.separator();

        let mut status_updates: Vec<(OrderId, String)> = Vec::new();
        let mut deletions: Vec<OrderId> = Vec::new();

        egui::ScrollArea::vertical().id_salt("orders").show(ui, |ui| {
            egui::Grid::new("orders_grid")
                .striped(true)
                .num_columns(9)
                .show(ui, |ui| {
                    for header in [
                        "#", "Customer", "Placed", "Items", "Total", "Payment", "Type", "Table",
                        "Status",
                    ] {
                        ui.label(RichText::new(header).strong());
                    }
                    ui.end_row();

                    for row in self.filtered_orders() {
                        ui.label(row.id.0.to_string());
                        ui.label(&row.customer_name);
                        ui.label(&row.placed_at);
                        ui.label(&row.items);
                        ui.label(format_inr(row.total));
                        ui.label(row.payment.as_str());
                        ui.label(row.order_type.as_str());
                        ui.label(row.table_number.as_deref().unwrap_or("-"));
                        ui.horizontal(|ui| {
                            egui::ComboBox::from_id_salt(("order_status", row.id.0))
                                .selected_text(row.status.as_str())
                                .show_ui(ui, |ui| {
                                    for status in OrderStatus::ALL {
                                        if ui
                                            .selectable_label(row.status == status, status.as_str())
                                            .clicked()
                                            && row.status != status
                                        {
                                            status_updates
                                                .push((row.id, status.as_str().to_string()));
                                        }
                                    }
                                });
                            if ui.button("Delete").clicked() {
                                deletions.push(row.id);
                            }
                        });
                        ui.end_row();
                    }
                });
        });

        for (order_id, status) in status_updates {
            self.dispatch(BackendCommand::UpdateStatus { order_id, status });
        }
        for order_id in deletions {
            self.dispatch(BackendCommand::DeleteOrder { order_id });
        }
    }

    fn render_new_order_tab(&mut self, ui: &mut egui::Ui) {
        ui.columns(2, |columns| {
            self.render_order_form(&mut columns[0]);
            self.render_order_summary(&mut columns[1]);
        });
    }

    fn render_order_form(&mut self, ui: &mut egui::Ui) {
        ui.heading("New Order");

        let selected_label = if self.form.customer_choice == NEW_CUSTOMER_SENTINEL {
            "New customer".to_string()
        } else {
            self.customers
                .iter()
                .find(|c| c.id.0.to_string() == self.form.customer_choice)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| self.form.customer_choice.clone())
        };
        let mut customer_changed = false;
        egui::ComboBox::from_label("Customer")
            .selected_text(selected_label)
            .show_ui(ui, |ui| {
                customer_changed |= ui
                    .selectable_value(
                        &mut self.form.customer_choice,
                        NEW_CUSTOMER_SENTINEL.to_string(),
                        "New customer",
                    )
                    .changed();
                for customer in &self.customers {
                    customer_changed |= ui
                        .selectable_value(
                            &mut self.form.customer_choice,
                            customer.id.0.to_string(),
                            &customer.name,
                        )
                        .changed();
                }
            });
        if customer_changed {
            self.form.toggle_customer_details();
        }

        if self.form.customer_details_visible {
            let name_label = if self.form.name_required { "Name *" } else { "Name" };
            let phone_label = if self.form.phone_required { "Phone *" } else { "Phone" };
            ui.horizontal(|ui| {
                ui.label(name_label);
                ui.text_edit_singleline(&mut self.form.customer_name);
            });
            ui.horizontal(|ui| {
                ui.label(phone_label);
                ui.text_edit_singleline(&mut self.form.customer_phone);
            });
            ui.horizontal(|ui| {
                ui.label("Email");
                ui.text_edit_singleline(&mut self.form.customer_email);
            });
            ui.horizontal(|ui| {
                ui.label("Address");
                ui.text_edit_singleline(&mut self.form.customer_address);
            });
        }

        let mut type_changed = false;
        ui.horizontal(|ui| {
            ui.label("Order type");
            for order_type in OrderType::ALL {
                type_changed |= ui
                    .radio_value(&mut self.form.order_type, order_type, order_type.as_str())
                    .changed();
            }
        });
        if type_changed {
            self.form.toggle_table_details();
        }

        if self.form.table_details_visible {
            let selected = if self.form.table_number.is_empty() {
                "Select table".to_string()
            } else {
                self.form.table_number.clone()
            };
            egui::ComboBox::from_label("Table")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    for table in &self.tables {
                        ui.selectable_value(
                            &mut self.form.table_number,
                            table.table_number.clone(),
                            format!(
                                "{} (seats {}, {})",
                                table.table_number, table.capacity, table.status
                            ),
                        );
                    }
                });
        }

        egui::ComboBox::from_label("Payment")
            .selected_text(self.form.payment_method.as_str())
            .show_ui(ui, |ui| {
                for method in PaymentMethod::ALL {
                    ui.selectable_value(&mut self.form.payment_method, method, method.as_str());
                }
            });

        ui.horizontal(|ui| {
            ui.label("Discount");
            ui.add(
                egui::DragValue::new(&mut self.form.discount_percent)
                    .range(0.0..=100.0)
                    .suffix("%"),
            );
        });

        ui.separator();
        ui.horizontal(|ui| {
            ui.label("Search menu");
            if ui.text_edit_singleline(&mut self.menu_search).changed() {
                let term = self.menu_search.clone();
                self.menu.apply_search(&term);
            }
        });

        let mut toggled: Vec<(MenuItemId, bool)> = Vec::new();
        egui::ScrollArea::vertical()
            .id_salt("menu_cards")
            .max_height(320.0)
            .show(ui, |ui| {
                for category in &self.menu.categories {
                    if !category.visible {
                        continue;
                    }
                    ui.label(RichText::new(&category.name).strong());
                    for card in &category.cards {
                        if !card.visible {
                            continue;
                        }
                        let mut checked = self.form.is_item_checked(card.item.id);
                        if ui
                            .checkbox(
                                &mut checked,
                                format!("{} ({})", card.item.name, card.price_text),
                            )
                            .changed()
                        {
                            toggled.push((card.item.id, checked));
                        }
                    }
                }
            });
        if !toggled.is_empty() {
            for (id, checked) in toggled {
                self.form.set_item_checked(id, checked);
            }
            self.summary = self.form.order_summary(&self.menu);
        }

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Place order").clicked() {
                self.submit_order();
            }
            if ui.button("Reset").clicked() {
                self.form.reset();
                self.summary = self.form.order_summary(&self.menu);
            }
        });
    }

    fn render_order_summary(&mut self, ui: &mut egui::Ui) {
        ui.heading("Order Summary");
        if let Some(placeholder) = self.summary.placeholder() {
            ui.label(RichText::new(placeholder).italics().weak());
        } else {
            for line in &self.summary.lines {
                ui.horizontal(|ui| {
                    ui.label(&line.name);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(&line.price_text)
                                .color(egui::Color32::from_rgb(0x28, 0xa7, 0x45)),
                        );
                    });
                });
                ui.separator();
            }
        }
        ui.horizontal(|ui| {
            ui.label(RichText::new("Total").strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(&self.summary.total_text).strong());
            });
        });
    }

    fn render_menu_tab(&mut self, ui: &mut egui::Ui) {
        ui.heading("Menu");
        egui::ScrollArea::vertical().id_salt("menu_tab").show(ui, |ui| {
            egui::Grid::new("menu_grid").striped(true).show(ui, |ui| {
                for header in ["Item", "Category", "Price"] {
                    ui.label(RichText::new(header).strong());
                }
                ui.end_row();
                for category in &self.menu.categories {
                    for card in &category.cards {
                        ui.label(&card.item.name);
                        ui.label(&category.name);
                        ui.label(&card.price_text);
                        ui.end_row();
                    }
                }
            });
        });
    }

    fn render_customers_tab(&mut self, ui: &mut egui::Ui) {
        ui.heading("Customers");
        let mut deletions: Vec<CustomerId> = Vec::new();
        egui::Grid::new("customers_grid").striped(true).show(ui, |ui| {
            for header in ["Name", "Phone", "Email", "Address", ""] {
                ui.label(RichText::new(header).strong());
            }
            ui.end_row();
            for customer in &self.customers {
                ui.label(&customer.name);
                ui.label(&customer.phone);
                ui.label(customer.email.as_deref().unwrap_or("-"));
                ui.label(customer.address.as_deref().unwrap_or("-"));
                if ui.button("Delete").clicked() {
                    deletions.push(customer.id);
                }
                ui.end_row();
            }
        });
        for customer_id in deletions {
            self.dispatch(BackendCommand::DeleteCustomer { customer_id });
        }
    }

    fn render_tables_tab(&mut self, ui: &mut egui::Ui) {
        ui.heading("Tables");
        egui::Grid::new("tables_grid").striped(true).show(ui, |ui| {
            for header in ["Table", "Capacity", "Status"] {
                ui.label(RichText::new(header).strong());
            }
            ui.end_row();
            for table in &self.tables {
                ui.label(&table.table_number);
                ui.label(table.capacity.to_string());
                let color = match table.status {
                    TableStatus::Available => egui::Color32::from_rgb(0x28, 0xa7, 0x45),
                    TableStatus::Occupied => egui::Color32::from_rgb(0xc0, 0x2b, 0x2b),
                    TableStatus::Reserved => egui::Color32::from_rgb(0xcc, 0x8a, 0x00),
                };
                ui.label(RichText::new(table.status.as_str()).color(color));
                ui.end_row();
            }
        });
    }

    fn render_alert_modal(&mut self, ctx: &egui::Context) {
        let Some(alert_text) = self.alert.clone() else {
            return;
        };
        egui::Window::new("Alert")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(alert_text);
                if ui.button("OK").clicked() {
                    self.alert = None;
                }
            });
    }
}

impl eframe::App for PosGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_ui_events();
        self.flashes.tick(Instant::now());

        egui::TopBottomPanel::top("nav").show(ctx, |ui| self.render_nav(ui));
        if !self.flashes.is_empty() {
            egui::TopBottomPanel::top("flash_tray").show(ctx, |ui| self.render_flashes(ui));
        }
        if !self.status_line.is_empty() {
            egui::TopBottomPanel::bottom("status_line").show(ctx, |ui| {
                ui.label(&self.status_line);
            });
        }

        let visible = self.tabs.visible_content().map(str::to_string);
        egui::CentralPanel::default().show(ctx, |ui| match visible.as_deref() {
            Some("orders") => self.render_orders_tab(ui),
            Some("new-order") => self.render_new_order_tab(ui),
            Some("menu") => self.render_menu_tab(ui),
            Some("customers") => self.render_customers_tab(ui),
            Some("tables") => self.render_tables_tab(ui),
            // unknown tab id: nothing to reveal
            _ => {}
        });

        self.render_alert_modal(ctx);

        // keep the flash fade animating without user input
        ctx.request_repaint_after(Duration::from_millis(200));
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedPosSettings {
            status_filter: self.status_filter.as_str().to_string(),
            type_filter: self.type_filter.as_str().to_string(),
            menu_search: self.menu_search.clone(),
        };
        if let Ok(text) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::form::EMPTY_ORDER_ALERT;
    use crossbeam_channel::bounded;

    fn test_app() -> (
        PosGuiApp,
        Receiver<BackendCommand>,
        Sender<UiEvent>,
    ) {
        let (cmd_tx, cmd_rx) = bounded(16);
        let (ui_tx, ui_rx) = bounded(16);
        let startup = StartupConfig {
            server_url: Url::parse("http://127.0.0.1:5000/").expect("test url"),
        };
        (PosGuiApp::new(startup, None, cmd_tx, ui_rx), cmd_rx, ui_tx)
    }

    #[test]
    fn page_load_establishes_initial_derived_state() {
        let (app, _cmd_rx, _ui_tx) = test_app();
        assert_eq!(app.tabs.visible_content(), Some("orders"));
        assert_eq!(app.tabs.active_nav(), Some(0));
        assert!(app.form.customer_details_visible);
        assert!(app.form.table_details_visible);
        assert_eq!(app.summary.total_text, "₹0.00");
        assert!(app.summary.placeholder().is_some());
    }

    #[test]
    fn submitting_with_no_items_raises_alert_and_sends_nothing() {
        let (mut app, cmd_rx, _ui_tx) = test_app();
        app.submit_order();
        assert_eq!(app.alert.as_deref(), Some(EMPTY_ORDER_ALERT));
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn valid_submission_queues_a_place_order_command() {
        let (mut app, cmd_rx, _ui_tx) = test_app();
        app.form.customer_name = "Asha".to_string();
        app.form.customer_phone = "9876543210".to_string();
        app.form.set_item_checked(MenuItemId(1), true);
        app.submit_order();

        assert_eq!(app.alert, None);
        match cmd_rx.try_recv() {
            Ok(BackendCommand::PlaceOrder { form, total }) => {
                assert_eq!(form.items, vec![MenuItemId(1)]);
                assert_eq!(total, 220.0);
            }
            _ => panic!("expected a PlaceOrder command"),
        }
    }

    #[test]
    fn placed_order_event_appends_row_and_occupies_table() {
        let (mut app, _cmd_rx, _ui_tx) = test_app();
        app.form.customer_name = "Asha".to_string();
        app.form.customer_phone = "9876543210".to_string();
        app.form.set_item_checked(MenuItemId(1), true);
        app.form.table_number = "T3".to_string();

        let total = app.form.order_total(&app.menu);
        let form = app.form.to_submission();
        app.handle_event(UiEvent::OrderPlaced { form, total });

        assert_eq!(app.orders.len(), 1);
        assert_eq!(app.orders[0].status, OrderStatus::Pending);
        assert_eq!(app.orders[0].customer_name, "Asha");
        assert_eq!(app.customers.len(), 1);
        let t3 = app
            .tables
            .iter()
            .find(|t| t.table_number == "T3")
            .expect("table present");
        assert_eq!(t3.status, TableStatus::Occupied);
        // form reset back to defaults
        assert!(app.form.selected.is_empty());
        assert!(!app.flashes.is_empty());
    }

    #[test]
    fn completing_a_dine_in_order_frees_its_table() {
        let (mut app, _cmd_rx, _ui_tx) = test_app();
        app.form.customer_name = "Asha".to_string();
        app.form.customer_phone = "9876543210".to_string();
        app.form.set_item_checked(MenuItemId(1), true);
        app.form.table_number = "T5".to_string();
        let total = app.form.order_total(&app.menu);
        let form = app.form.to_submission();
        app.handle_event(UiEvent::OrderPlaced { form, total });
        let order_id = app.orders[0].id;

        app.handle_event(UiEvent::OrderStatusUpdated {
            order_id,
            status: "Completed".to_string(),
        });
        assert_eq!(app.orders[0].status, OrderStatus::Completed);
        let t5 = app
            .tables
            .iter()
            .find(|t| t.table_number == "T5")
            .expect("table present");
        assert_eq!(t5.status, TableStatus::Available);
    }

    #[test]
    fn local_order_list_respects_both_filters() {
        let (mut app, _cmd_rx, _ui_tx) = test_app();
        for (status, order_type) in [
            (OrderStatus::Pending, OrderType::DineIn),
            (OrderStatus::Completed, OrderType::Takeaway),
            (OrderStatus::Pending, OrderType::Takeaway),
        ] {
            app.orders.push(OrderRow {
                id: OrderId(app.next_local_order_id),
                customer_name: "x".to_string(),
                placed_at: "1 jun 12:00 pm".to_string(),
                total: 100.0,
                payment: PaymentMethod::Cash,
                status,
                order_type,
                table_number: None,
                items: String::new(),
            });
            app.next_local_order_id += 1;
        }

        app.status_filter = StatusFilter::Only(OrderStatus::Pending);
        app.type_filter = TypeFilter::All;
        assert_eq!(app.filtered_orders().len(), 2);

        app.type_filter = TypeFilter::Only(OrderType::Takeaway);
        assert_eq!(app.filtered_orders().len(), 1);
    }

    #[test]
    fn filter_navigation_carries_the_current_page_url() {
        let (mut app, cmd_rx, _ui_tx) = test_app();
        app.status_filter = StatusFilter::Only(OrderStatus::Preparing);
        app.type_filter = TypeFilter::Only(OrderType::Delivery);
        app.dispatch_filter_navigation();

        match cmd_rx.try_recv() {
            Ok(BackendCommand::ApplyOrderFilters {
                current_url,
                status,
                order_type,
            }) => {
                assert_eq!(current_url.as_str(), "http://127.0.0.1:5000/");
                assert_eq!(status, "Preparing");
                assert_eq!(order_type, "Delivery");
            }
            _ => panic!("expected an ApplyOrderFilters command"),
        }
    }

    #[test]
    fn transport_errors_surface_as_flash_messages() {
        use crate::controller::events::{UiError, UiErrorContext};
        let (mut app, _cmd_rx, _ui_tx) = test_app();
        app.handle_event(UiEvent::Error(UiError::from_message(
            UiErrorContext::UpdateStatus,
            "connection refused",
        )));
        let flash = app.flashes.iter().next().expect("flash present");
        assert_eq!(flash.kind, FlashKind::Error);
        assert!(flash.text.starts_with("Transport:"));
    }
}
