//! Admin landing page: spreadsheet sync, vendor integrations, and links to the
//! other back-office screens.

use booking::Vendor;
use booking::endpoints;
use leptos::prelude::*;

use crate::state::ui::{Notice, UiState, notify};

/// Which spreadsheet an upload card syncs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Spreadsheet {
    Rates,
    Cars,
}

impl Spreadsheet {
    pub fn label(self) -> &'static str {
        match self {
            Self::Rates => "Rates",
            Self::Cars => "Cars",
        }
    }

    pub fn path(self) -> String {
        match self {
            Self::Rates => endpoints::upload_rates(),
            Self::Cars => endpoints::upload_cars(),
        }
    }

    pub fn success_message(self) -> String {
        format!("{} synchronization completed successfully!", self.label())
    }
}

/// Vendor from the add form. Blank optional fields are dropped.
///
/// # Errors
///
/// The message shown when the name is missing.
pub fn vendor_from_inputs(name: &str, vendor_type: &str, email: &str, api_url: &str) -> Result<Vendor, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Vendor name is required.");
    }
    let optional = |s: &str| Some(s.trim().to_owned()).filter(|s| !s.is_empty());
    let defaults = Vendor::default();
    Ok(Vendor {
        vendor_id: None,
        name: name.to_owned(),
        vendor_type: optional(vendor_type).unwrap_or(defaults.vendor_type),
        email: optional(email),
        api_url: optional(api_url),
    })
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <div class="page admin-page">
            <header class="page__header">
                <h1>"Admin dashboard"</h1>
            </header>
            <div class="card-grid">
                <UploadCard sheet=Spreadsheet::Rates blurb="Hub-specific daily, weekly, and monthly rate charts."/>
                <UploadCard sheet=Spreadsheet::Cars blurb="Onboard vehicles into the fleet inventory."/>
                <LinkCard title="Bookings" blurb="Every reservation across all hubs." href="/admin/bookings"/>
                <LinkCard title="Staff" blurb="Hub staff accounts and access." href="/admin/staff"/>
                <LinkCard title="Fleet" blurb="Vehicle status and availability by hub." href="/admin/fleet"/>
            </div>
            <VendorPanel/>
        </div>
    }
}

#[component]
fn LinkCard(title: &'static str, blurb: &'static str, href: &'static str) -> impl IntoView {
    view! {
        <a class="card card--link" href=href>
            <h3 class="card__title">{title}</h3>
            <p class="card__text">{blurb}</p>
        </a>
    }
}

#[component]
fn UploadCard(sheet: Spreadsheet, blurb: &'static str) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let file_input = NodeRef::<leptos::html::Input>::new();
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = file_input.get().and_then(|input| input.files()).and_then(|files| files.get(0)) else {
                notify(ui, Notice::warning("No file", "Please select a file first."));
                return;
            };
            busy.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_spreadsheet(&sheet.path(), &file).await {
                    Ok(_) => {
                        notify(ui, Notice::success("Upload complete", sheet.success_message()));
                        if let Some(input) = file_input.get_untracked() {
                            input.set_value("");
                        }
                    }
                    Err(e) => notify(ui, Notice::danger("Upload failed", format!("Upload failed: {e}"))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ui, sheet);
    };

    view! {
        <form class="card" on:submit=on_submit>
            <h3 class="card__title">{format!("Sync {}", sheet.label())}</h3>
            <p class="card__text">{blurb}</p>
            <input class="field__input" type="file" accept=".xlsx,.xls,.csv" node_ref=file_input/>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Uploading..." } else { "Upload" }}
            </button>
        </form>
    }
}

#[component]
fn VendorPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let vendors = RwSignal::new(Vec::<Vendor>::new());
    let show_form = RwSignal::new(false);
    let defaults = Vendor::default();
    let name = RwSignal::new(String::new());
    let vendor_type = RwSignal::new(defaults.vendor_type);
    let email = RwSignal::new(String::new());
    let api_url = RwSignal::new(defaults.api_url.unwrap_or_default());

    let load = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::get_vendors().await {
                Ok(list) => vendors.set(list),
                Err(e) => log::error!("vendors failed: {e}"),
            }
        });
    };
    load();

    let add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let vendor = match vendor_from_inputs(&name.get(), &vendor_type.get(), &email.get(), &api_url.get()) {
            Ok(vendor) => vendor,
            Err(message) => {
                notify(ui, Notice::warning("Missing name", message));
                return;
            }
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::add_vendor(&vendor).await {
                Ok(()) => {
                    notify(ui, Notice::success("Vendor added", "Vendor added successfully."));
                    name.set(String::new());
                    email.set(String::new());
                    show_form.set(false);
                    load();
                }
                Err(e) => notify(ui, Notice::danger("Failed to add vendor.", e.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = vendor;
    };

    let test_connection = move |vendor_id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::test_vendor_connection(vendor_id).await {
                Ok(message) => notify(ui, Notice::success("Connection Success", message)),
                Err(e) => notify(ui, Notice::danger("Connection Failed", e.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = vendor_id;
    };

    let text_input = move |label: &'static str, value: RwSignal<String>| {
        view! {
            <label class="field">
                <span class="field__label">{label}</span>
                <input
                    class="field__input"
                    type="text"
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <section class="panel">
            <header class="panel__header">
                <h2>"Vendors"</h2>
                <button class="btn" on:click=move |_| show_form.update(|s| *s = !*s)>
                    {move || if show_form.get() { "Close" } else { "Add vendor" }}
                </button>
            </header>
            <Show when=move || show_form.get()>
                <form class="panel__form" on:submit=add>
                    {text_input("Name", name)}
                    {text_input("Type", vendor_type)}
                    {text_input("Email", email)}
                    {text_input("API URL", api_url)}
                    <button class="btn btn--primary" type="submit">
                        "Save vendor"
                    </button>
                </form>
            </Show>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Type"</th>
                        <th>"Email"</th>
                        <th>"API URL"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        vendors
                            .get()
                            .into_iter()
                            .map(|v| {
                                let test = v.vendor_id.map(|id| {
                                    view! {
                                        <button class="btn" on:click=move |_| test_connection(id)>
                                            "Test connection"
                                        </button>
                                    }
                                });
                                view! {
                                    <tr>
                                        <td>{v.name}</td>
                                        <td>{v.vendor_type}</td>
                                        <td>{v.email.unwrap_or_default()}</td>
                                        <td>{v.api_url.unwrap_or_default()}</td>
                                        <td>{test}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </section>
    }
}

#[cfg(test)]
#[path = "admin_dashboard_test.rs"]
mod admin_dashboard_test;
