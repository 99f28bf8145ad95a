//! Hub staff accounts: list, register, revoke.

use booking::validate::{FieldErrors, validate_staff};
use booking::{Hub, HubRef, RegisterStaffRequest, StaffMember};
use leptos::prelude::*;

use crate::components::field::{ErrorList, Field};
use crate::state::ui::{Notice, UiState, notify};

/// Registration payload from the form inputs. The hub select yields its id
/// as text; anything unparseable becomes 0 and fails validation.
pub fn staff_request(username: &str, email: &str, password: &str, hub_id: &str) -> RegisterStaffRequest {
    RegisterStaffRequest {
        username: username.trim().to_owned(),
        email: email.trim().to_owned(),
        password: password.to_owned(),
        hub: HubRef { hub_id: hub_id.trim().parse().unwrap_or_default(), ..HubRef::default() },
    }
}

/// Hub column for the staff table.
pub fn hub_label(member: &StaffMember) -> String {
    let Some(hub) = &member.hub else {
        return "Unassigned".to_owned();
    };
    let name = hub.hub_name.clone().unwrap_or_else(|| format!("Hub #{}", hub.hub_id));
    match hub.city.as_ref().and_then(|c| c.city_name.as_deref()) {
        Some(city) => format!("{name}, {city}"),
        None => name,
    }
}

#[component]
pub fn AdminStaffPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let staff = RwSignal::new(Vec::<StaffMember>::new());
    let hubs = RwSignal::new(Vec::<Hub>::new());
    let loading = RwSignal::new(true);
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let hub_id = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let confirm_delete = RwSignal::new(None::<i64>);

    let load = move || {
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api;

            match api::get_admin_staff().await {
                Ok(list) => staff.set(list),
                Err(e) => notify(ui, Notice::danger("Staff unavailable", format!("Failed to synchronize staff data. {e}"))),
            }
            match api::get_hubs(None).await {
                Ok(list) => hubs.set(list),
                Err(e) => log::error!("hubs failed: {e}"),
            }
            loading.set(false);
        });
    };
    load();

    let register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = staff_request(&username.get(), &email.get(), &password.get(), &hub_id.get());
        let found = validate_staff(&request);
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::default());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register_staff(&request).await {
                Ok(_) => {
                    notify(ui, Notice::success("Staff registered", "New staff member registered successfully!"));
                    username.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    hub_id.set(String::new());
                    load();
                }
                Err(e) => notify(ui, Notice::danger("Registration failed", format!("Registration failed: {e}"))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let revoke = move |staff_id: i64| {
        confirm_delete.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_staff(staff_id).await {
                Ok(()) => {
                    staff.update(|list| list.retain(|m| m.id != staff_id));
                    notify(ui, Notice::success("Access revoked", "Staff access revoked."));
                }
                Err(e) => notify(ui, Notice::danger("Revoke failed", format!("Failed to revoke access. {e}"))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = staff_id;
    };

    let field_errors = Signal::derive(move || errors.get());

    view! {
        <div class="page admin-page">
            <header class="page__header">
                <h1>"Staff management"</h1>
            </header>
            <div class="split">
                <form class="panel panel__form" on:submit=register>
                    <h2>"Register staff"</h2>
                    <Field label="Username" name="username" value=username errors=field_errors required=true/>
                    <Field label="Email" name="email" value=email errors=field_errors kind="email" required=true/>
                    <Field
                        label="Initial password"
                        name="password"
                        value=password
                        errors=field_errors
                        kind="password"
                        required=true
                    />
                    <label class="field">
                        <span class="field__label">"Hub"</span>
                        <select class="field__input" on:change=move |ev| hub_id.set(event_target_value(&ev))>
                            <option value="" selected=move || hub_id.with(String::is_empty)>
                                "Select a hub"
                            </option>
                            {move || {
                                hubs.get()
                                    .into_iter()
                                    .map(|h| {
                                        let id = h.hub_id.to_string();
                                        let selected = {
                                            let id = id.clone();
                                            move || hub_id.with(|v| *v == id)
                                        };
                                        view! {
                                            <option value=id selected=selected>
                                                {h.hub_name}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                        <ErrorList errors=Signal::derive(move || {
                            let mut only_hub = FieldErrors::default();
                            if let Some(message) = errors.with(|e| e.get("hub").map(str::to_owned)) {
                                only_hub.insert("hub", message);
                            }
                            only_hub
                        })/>
                    </label>
                    <button class="btn btn--primary" type="submit">
                        "Register"
                    </button>
                </form>
                <section class="panel">
                    <h2>"Staff"</h2>
                    <Show when=move || !loading.get() fallback=|| view! { <p class="page__loading">"Loading staff..."</p> }>
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Username"</th>
                                    <th>"Email"</th>
                                    <th>"Role"</th>
                                    <th>"Hub"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    staff
                                        .get()
                                        .into_iter()
                                        .map(|m| {
                                            let id = m.id;
                                            let hub = hub_label(&m);
                                            view! {
                                                <tr>
                                                    <td>{m.username}</td>
                                                    <td>{m.email.unwrap_or_default()}</td>
                                                    <td>{m.role.unwrap_or_default()}</td>
                                                    <td>{hub}</td>
                                                    <td>
                                                        <Show
                                                            when=move || confirm_delete.get() == Some(id)
                                                            fallback=move || {
                                                                view! {
                                                                    <button class="btn btn--danger" on:click=move |_| confirm_delete.set(Some(id))>
                                                                        "Remove"
                                                                    </button>
                                                                }
                                                            }
                                                        >
                                                            <button class="btn btn--danger" on:click=move |_| revoke(id)>
                                                                "Confirm remove"
                                                            </button>
                                                            <button class="btn" on:click=move |_| confirm_delete.set(None)>
                                                                "Keep"
                                                            </button>
                                                        </Show>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </tbody>
                        </table>
                        <Show when=move || staff.with(Vec::is_empty)>
                            <p class="page__empty">"No staff accounts yet."</p>
                        </Show>
                    </Show>
                </section>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "admin_staff_test.rs"]
mod admin_staff_test;
