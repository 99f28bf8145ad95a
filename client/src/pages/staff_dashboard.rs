//! Hub staff console: the hub's booking board, the handover and return
//! desks, and the on-spot counter for walk-in rentals.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/staff/dashboard`, `/staff/handover`, `/staff/return` and
//! `/staff/on-spot`; the route picks the tab. Desk tabs take the booking from
//! `?id=` so the board's quick actions are plain links.

use booking::dates::format_display;
use booking::filter::{HubStatusFilter, filter_hub_bookings};
use booking::pricing::{MAX_CHILD_SEATS, estimate_modified_total, format_inr, is_child_seat};
use booking::validate::{FieldErrors, validate_customer};
use booking::{AddOn, BookingResponse, BookingStatus, Car, Customer, FuelLevel};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::booking_card::BookingCard;
use crate::components::customer_form::CustomerForm;
use crate::components::price_summary::PriceSummary;
use crate::state::auth::AuthState;
use crate::state::staff::{
    ContactEdit, HandoverForm, OnSpotBooking, handover_block, parse_booking_id, return_block, return_request,
};
use crate::state::ui::{Notice, UiState, notify};
use crate::util::clock::{today, today_input};
use crate::util::download::fetch_invoice;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StaffTab {
    HubBookings,
    Handover,
    Return,
    OnSpot,
}

impl StaffTab {
    pub const ALL: [Self; 4] = [Self::HubBookings, Self::Handover, Self::Return, Self::OnSpot];

    pub fn label(self) -> &'static str {
        match self {
            Self::HubBookings => "Hub bookings",
            Self::Handover => "Handover",
            Self::Return => "Return",
            Self::OnSpot => "On-spot booking",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::HubBookings => "/staff/dashboard",
            Self::Handover => "/staff/handover",
            Self::Return => "/staff/return",
            Self::OnSpot => "/staff/on-spot",
        }
    }

    /// Desk link for one booking.
    pub fn href_for(self, booking_id: i64) -> String {
        format!("{}?id={booking_id}", self.path())
    }
}

/// Filter tabs with how many hub bookings each would show.
pub fn hub_tab_counts(bookings: &[BookingResponse]) -> Vec<(HubStatusFilter, usize)> {
    HubStatusFilter::tabs()
        .into_iter()
        .map(|tab| {
            let n = filter_hub_bookings(bookings, &tab).len();
            (tab, n)
        })
        .collect()
}

/// The quick action the board offers for a booking in `status`.
pub fn quick_action(status: &BookingStatus) -> Option<StaffTab> {
    if handover_block(status).is_none() {
        Some(StaffTab::Handover)
    } else if return_block(status).is_none() {
        Some(StaffTab::Return)
    } else {
        None
    }
}

#[component]
pub fn StaffDashboardPage(tab: StaffTab) -> impl IntoView {
    let panel = match tab {
        StaffTab::HubBookings => view! { <HubBookingsPanel/> }.into_any(),
        StaffTab::Handover => view! { <HandoverDesk/> }.into_any(),
        StaffTab::Return => view! { <ReturnDesk/> }.into_any(),
        StaffTab::OnSpot => view! { <OnSpotDesk/> }.into_any(),
    };
    view! {
        <div class="page staff-page">
            <header class="page__header">
                <h1>"Staff dashboard"</h1>
                <p class="page__subtitle">"Manage vehicle handovers, returns, and reservations."</p>
            </header>
            <nav class="tabs">
                {StaffTab::ALL
                    .into_iter()
                    .map(|t| {
                        let class = if t == tab { "tabs__item tabs__item--active" } else { "tabs__item" };
                        view! {
                            <a class=class href=t.path()>
                                {t.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            {panel}
        </div>
    }
}

// =============================================================================
// HUB BOOKINGS
// =============================================================================

#[component]
fn HubBookingsPanel() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let hub_id = auth.with_untracked(|a| a.session.as_ref().and_then(|s| s.hub_id));
    let bookings = RwSignal::new(Vec::<BookingResponse>::new());
    let filter = RwSignal::new(HubStatusFilter::All);
    let loading = RwSignal::new(hub_id.is_some());

    if let Some(hub_id) = hub_id {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::get_bookings_by_hub(hub_id).await {
                Ok(list) => bookings.set(list),
                Err(e) => log::error!("hub {hub_id} bookings failed: {e}"),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = hub_id;
    }

    let shown = move || bookings.with(|all| filter.with(|f| filter_hub_bookings(all, f).into_iter().cloned().collect::<Vec<_>>()));

    view! {
        <section class="panel">
            <Show
                when=move || hub_id.is_some()
                fallback=|| view! { <p class="page__empty">"No hub is assigned to this account."</p> }
            >
                <div class="tabs tabs--pills">
                    {move || {
                        bookings
                            .with(|all| hub_tab_counts(all))
                            .into_iter()
                            .map(|(tab, n)| {
                                let label = format!("{} ({n})", tab.label());
                                let active = tab == filter.get();
                                let class = if active { "tabs__item tabs__item--active" } else { "tabs__item" };
                                view! {
                                    <button class=class on:click=move |_| filter.set(tab.clone())>
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <Show when=move || !loading.get() fallback=|| view! { <p class="page__loading">"Loading hub bookings..."</p> }>
                    <Show when=move || !shown().is_empty() fallback=|| view! { <p class="page__empty">"No bookings found."</p> }>
                        <div class="booking-list">
                            {move || {
                                shown()
                                    .into_iter()
                                    .map(|b| {
                                        let id = b.booking_id;
                                        let action = quick_action(&b.booking_status).map(|t| {
                                            view! {
                                                <a class="btn btn--primary" href=t.href_for(id)>
                                                    {t.label()}
                                                </a>
                                            }
                                        });
                                        view! { <BookingCard booking=b>{action}</BookingCard> }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                </Show>
            </Show>
        </section>
    }
}

// =============================================================================
// DESKS
// =============================================================================

/// Booking id box shared by both desks; submitting rewrites `?id=`.
#[component]
fn DeskLookup(tab: StaffTab) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let query = use_query_map();
    let input = RwSignal::new(query.with_untracked(|q| q.get("id").unwrap_or_default()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match parse_booking_id(&input.get()) {
            Some(id) => navigate(&tab.href_for(id), NavigateOptions::default()),
            None => notify(ui, Notice::warning("Invalid booking id", "Enter the numeric booking id.")),
        }
    };

    view! {
        <form class="lookup-form" on:submit=on_submit>
            <input
                class="field__input"
                type="text"
                placeholder="Booking id"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
            />
            <button class="btn btn--primary" type="submit">
                "Find booking"
            </button>
        </form>
    }
}

/// Fetch `booking_id` for a desk, refusing it when `block` objects to its status.
fn open_at_desk(
    booking_id: i64,
    block: fn(&BookingStatus) -> Option<Notice>,
    ui: RwSignal<UiState>,
    found: Callback<BookingResponse>,
) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::get_booking(booking_id).await {
            Ok(b) => match block(&b.booking_status) {
                Some(notice) => notify(ui, notice),
                None => found.run(b),
            },
            Err(e) => notify(ui, Notice::danger("Booking not found", e.to_string())),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (booking_id, block, ui, found);
}

fn query_booking_id() -> Memo<Option<i64>> {
    let query = use_query_map();
    Memo::new(move |_| query.with(|q| q.get("id").as_deref().and_then(parse_booking_id)))
}

#[component]
fn FuelSelect(value: RwSignal<FuelLevel>) -> impl IntoView {
    view! {
        <select
            class="field__input"
            on:change=move |ev| {
                if let Some(fuel) = FuelLevel::parse(&event_target_value(&ev)) {
                    value.set(fuel);
                }
            }
        >
            {FuelLevel::ALL
                .into_iter()
                .map(|f| {
                    view! {
                        <option value=f.as_str() selected=move || value.get() == f>
                            {f.as_str()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

#[component]
fn DeskSummary(booking: BookingResponse) -> impl IntoView {
    let date = |d: &Option<String>| d.as_deref().map(format_display).unwrap_or_default();
    view! {
        <dl class="review">
            <dt>"Booking"</dt>
            <dd>{booking.confirmation_number.clone().unwrap_or_else(|| format!("#{}", booking.booking_id))}</dd>
            <dt>"Customer"</dt>
            <dd>{booking.customer_name.clone().unwrap_or_default()}</dd>
            <dt>"Vehicle"</dt>
            <dd>{booking.car_name.clone().unwrap_or_else(|| "To be allotted".to_owned())}</dd>
            <dt>"Plate"</dt>
            <dd>{booking.number_plate.clone().unwrap_or_default()}</dd>
            <dt>"Pickup"</dt>
            <dd>{date(&booking.start_date)}</dd>
            <dt>"Return"</dt>
            <dd>{date(&booking.end_date)}</dd>
        </dl>
    }
}

#[component]
fn HandoverDesk() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let booking_id = query_booking_id();
    let booking = RwSignal::new(None::<BookingResponse>);
    let form = RwSignal::new(HandoverForm::default());
    let fuel = RwSignal::new(FuelLevel::Full);
    let contact = RwSignal::new(ContactEdit::default());
    let cars = RwSignal::new(Vec::<Car>::new());
    let busy = RwSignal::new(false);

    let found = Callback::new(move |b: BookingResponse| {
        form.set(HandoverForm::for_booking(&b, &today_input()));
        fuel.set(FuelLevel::Full);
        contact.set(ContactEdit::from_booking(&b));
        cars.set(Vec::new());
        booking.set(Some(b));
    });

    Effect::new(move || {
        booking.set(None);
        if let Some(id) = booking_id.get() {
            open_at_desk(id, handover_block, ui, found);
        }
    });

    let estimate = Memo::new(move |_| {
        booking.with(|b| {
            b.as_ref()
                .and_then(|b| form.with(|f| estimate_modified_total(b, &f.start_date, &f.end_date)))
        })
    });

    let load_cars = move |_| {
        let Some(b) = booking.get_untracked() else { return };
        let Some(hub_id) = b.pickup_hub_id else {
            notify(ui, Notice::warning("Load Failed", "This booking has no pickup hub. Keeping the current car."));
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let start = b.start_date.unwrap_or_default();
            let end = b.end_date.unwrap_or_default();
            match crate::net::api::get_available_cars(hub_id, &start, &end, b.car_type_id).await {
                Ok(list) => cars.set(list),
                Err(e) => {
                    log::warn!("available cars for hub {hub_id} failed: {e}");
                    notify(ui, Notice::warning("Load Failed", "Could not load available cars. Defaulting to current car."));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = hub_id;
    };

    let complete = move |_| {
        let Some(id) = booking.with_untracked(|b| b.as_ref().map(|b| b.booking_id)) else { return };
        let mut request_form = form.get_untracked();
        request_form.fuel = fuel.get_untracked();
        let request = match request_form.request(id) {
            Ok(request) => request,
            Err(message) => {
                notify(ui, Notice::danger("Invalid dates", message));
                return;
            }
        };
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::process_handover(&request).await {
                Ok(_) => {
                    notify(ui, Notice::success("Handover complete", "Handover Completed Successfully!"));
                    booking.set(None);
                }
                Err(e) => notify(ui, Notice::danger("Handover Failed", e.to_string())),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <section class="panel">
            <DeskLookup tab=StaffTab::Handover/>
            {move || {
                booking
                    .get()
                    .map(|b| {
                        let customer_id = b.customer_id;
                        view! {
                            <div class="desk">
                                <DeskSummary booking=b/>
                                <ContactEditor contact=contact customer_id=customer_id booking=booking/>
                                <div class="desk__form">
                                    <label class="field">
                                        <span class="field__label">"Pickup date"</span>
                                        <input
                                            class="field__input"
                                            type="date"
                                            prop:value=move || form.with(|f| f.start_date.clone())
                                            on:input=move |ev| form.update(|f| f.start_date = event_target_value(&ev))
                                        />
                                    </label>
                                    <label class="field">
                                        <span class="field__label">"Return date"</span>
                                        <input
                                            class="field__input"
                                            type="date"
                                            prop:value=move || form.with(|f| f.end_date.clone())
                                            on:input=move |ev| form.update(|f| f.end_date = event_target_value(&ev))
                                        />
                                    </label>
                                    {move || {
                                        estimate
                                            .get()
                                            .map(|e| {
                                                view! {
                                                    <p class="desk__estimate">
                                                        {format!("Revised estimate: {} for {} day(s)", format_inr(e.total), e.days)}
                                                    </p>
                                                }
                                            })
                                    }}
                                    <label class="field">
                                        <span class="field__label">"Vehicle"</span>
                                        <select
                                            class="field__input"
                                            on:change=move |ev| form.update(|f| f.car_id = event_target_value(&ev).parse().ok())
                                        >
                                            <option value="">"Keep booked vehicle"</option>
                                            {move || {
                                                cars.get()
                                                    .into_iter()
                                                    .map(|c| view! { <option value=c.car_id.to_string()>{c.label()}</option> })
                                                    .collect_view()
                                            }}
                                        </select>
                                    </label>
                                    <button class="btn" on:click=load_cars>
                                        "Load available cars"
                                    </button>
                                    <label class="field">
                                        <span class="field__label">"Fuel"</span>
                                        <FuelSelect value=fuel/>
                                    </label>
                                    <label class="field">
                                        <span class="field__label">"Notes"</span>
                                        <textarea
                                            class="field__input"
                                            prop:value=move || form.with(|f| f.notes.clone())
                                            on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
                                        ></textarea>
                                    </label>
                                    <button class="btn btn--primary" disabled=move || busy.get() on:click=complete>
                                        "Complete handover"
                                    </button>
                                </div>
                            </div>
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn ReturnDesk() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let booking_id = query_booking_id();
    let booking = RwSignal::new(None::<BookingResponse>);
    let fuel = RwSignal::new(FuelLevel::Full);
    let notes = RwSignal::new(String::new());
    let returned = RwSignal::new(None::<i64>);
    let busy = RwSignal::new(false);

    let found = Callback::new(move |b: BookingResponse| {
        fuel.set(FuelLevel::Full);
        notes.set(String::new());
        booking.set(Some(b));
    });

    Effect::new(move || {
        booking.set(None);
        if let Some(id) = booking_id.get() {
            open_at_desk(id, return_block, ui, found);
        }
    });

    let complete = move |_| {
        let Some(id) = booking.with_untracked(|b| b.as_ref().map(|b| b.booking_id)) else { return };
        let request = return_request(id, &today_input(), fuel.get_untracked(), &notes.get_untracked());
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::return_car(&request).await {
                Ok(_) => {
                    notify(ui, Notice::success("Return complete", "Return Processed Successfully! Invoice generated."));
                    returned.set(Some(id));
                    booking.set(None);
                }
                Err(e) => notify(ui, Notice::danger("Return Failed", e.to_string())),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <section class="panel">
            <DeskLookup tab=StaffTab::Return/>
            {move || {
                returned
                    .get()
                    .map(|id| {
                        view! {
                            <p class="desk__done">
                                {format!("Booking #{id} returned. ")}
                                <button class="btn" on:click=move |_| fetch_invoice(id, ui)>
                                    "Download invoice"
                                </button>
                            </p>
                        }
                    })
            }}
            {move || {
                booking
                    .get()
                    .map(|b| {
                        view! {
                            <div class="desk">
                                <DeskSummary booking=b/>
                                <div class="desk__form">
                                    <label class="field">
                                        <span class="field__label">"Fuel"</span>
                                        <FuelSelect value=fuel/>
                                    </label>
                                    <label class="field">
                                        <span class="field__label">"Notes"</span>
                                        <textarea
                                            class="field__input"
                                            prop:value=move || notes.get()
                                            on:input=move |ev| notes.set(event_target_value(&ev))
                                        ></textarea>
                                    </label>
                                    <button class="btn btn--primary" disabled=move || busy.get() on:click=complete>
                                        "Complete return"
                                    </button>
                                </div>
                            </div>
                        }
                    })
            }}
        </section>
    }
}

// =============================================================================
// ON-SPOT COUNTER
// =============================================================================

/// Who is renting at the counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Renter {
    #[default]
    Unknown,
    Member,
    New,
}

#[component]
fn OnSpotDesk() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let hub_id = auth.with_untracked(|a| a.session.as_ref().and_then(|s| s.hub_id));
    let spot = RwSignal::new(OnSpotBooking::starting(today()));
    let cars = RwSignal::new(Vec::<Car>::new());
    let add_ons = RwSignal::new(Vec::<AddOn>::new());
    let searched = RwSignal::new(false);
    let email = RwSignal::new(String::new());
    let renter = RwSignal::new(Renter::Unknown);
    let customer = RwSignal::new(Customer::default());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);

    let reset = move || {
        spot.set(OnSpotBooking::starting(today()));
        cars.set(Vec::new());
        searched.set(false);
        email.set(String::new());
        renter.set(Renter::Unknown);
        customer.set(Customer::default());
        errors.set(FieldErrors::default());
    };

    let find_cars = move |_| {
        let Some(hub_id) = hub_id else { return };
        if let Err(notice) = spot.with_untracked(|s| s.check_dates(today())) {
            notify(ui, notice);
            return;
        }
        let (start, end) = spot.with_untracked(|s| (s.start_date.clone(), s.end_date.clone()));
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api;

            match api::get_available_cars(hub_id, &start, &end, None).await {
                Ok(list) => {
                    cars.set(list);
                    searched.set(true);
                }
                Err(e) => notify(ui, Notice::danger("Search failed", format!("Error finding cars: {e}"))),
            }
            if add_ons.with_untracked(Vec::is_empty) {
                match api::get_add_ons().await {
                    Ok(list) => add_ons.set(list),
                    Err(e) => log::error!("failed to load add-ons: {e}"),
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (start, end, hub_id);
    };

    let find_customer = move |_| {
        let typed = email.get_untracked().trim().to_owned();
        if typed.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::find_customer(&typed).await {
                Ok(Some(found)) => {
                    customer.set(found.normalized_for_form());
                    renter.set(Renter::Member);
                }
                outcome => {
                    if let Err(e) = outcome {
                        log::warn!("customer lookup failed: {e}");
                    }
                    customer.set(Customer::blank(&typed));
                    renter.set(Renter::New);
                    notify(ui, Notice::info("New customer", "Member not found. Proceeding with registration."));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = typed;
    };

    let confirm = move |_| {
        let Some(hub_id) = hub_id else { return };
        if busy.get_untracked() {
            return;
        }
        let is_new = renter.get_untracked() == Renter::New;
        let renter_record = customer.get_untracked().cleaned();
        if is_new {
            let found = validate_customer(&renter_record, today());
            let count = found.len();
            errors.set(found);
            if count > 0 {
                notify(ui, Notice::warning("Check the renter details", format!("{count} field(s) need attention.")));
                return;
            }
        }
        let booking = spot.get_untracked();
        let catalogue = add_ons.get_untracked();
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api;
            use crate::state::staff::{auto_handover, on_spot_done};

            let outcome = async {
                let renter_record = if is_new {
                    api::save_customer(&renter_record).await.map_err(|e| Notice::danger("Booking Failed", e.to_string()))?
                } else {
                    renter_record
                };
                let request = booking.booking_request(hub_id, &renter_record, &catalogue, today())?;
                let created =
                    api::create_booking(&request).await.map_err(|e| Notice::danger("Booking Failed", e.to_string()))?;
                if let Err(e) = api::process_handover(&auto_handover(&created, request.car_id)).await {
                    log::warn!("auto handover of booking {} failed: {e}", created.booking_id);
                    return Ok(Notice::warning(
                        "Handover pending",
                        format!("Booking #{} was created but not handed over: {e}", created.booking_id),
                    ));
                }
                Ok::<Notice, Notice>(on_spot_done(&created))
            }
            .await;
            match outcome {
                Ok(notice) => {
                    notify(ui, notice);
                    reset();
                }
                Err(notice) => notify(ui, notice),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (hub_id, booking, catalogue, renter_record, reset);
    };

    let quote = Signal::derive(move || add_ons.with(|list| spot.with(|s| s.quote(list))));
    let car_picked = move || spot.with(|s| s.car.is_some());

    view! {
        <section class="panel">
            <Show
                when=move || hub_id.is_some()
                fallback=|| view! { <p class="page__empty">"No hub is assigned to this account."</p> }
            >
                <div class="desk__form">
                    <label class="field">
                        <span class="field__label">"Pickup date"</span>
                        <input
                            class="field__input"
                            type="date"
                            prop:value=move || spot.with(|s| s.start_date.clone())
                            on:input=move |ev| spot.update(|s| s.set_dates(Some(event_target_value(&ev)), None))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Return date"</span>
                        <input
                            class="field__input"
                            type="date"
                            prop:value=move || spot.with(|s| s.end_date.clone())
                            on:input=move |ev| spot.update(|s| s.set_dates(None, Some(event_target_value(&ev))))
                        />
                    </label>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=find_cars>
                        {move || if busy.get() { "Searching fleet..." } else { "Check available vehicles" }}
                    </button>
                </div>
                <Show when=move || searched.get()>
                    <Show
                        when=move || !cars.with(Vec::is_empty)
                        fallback=|| view! { <p class="page__empty">"No vehicles are free at this hub for those dates."</p> }
                    >
                        <div class="car-list">
                            {move || {
                                cars.get()
                                    .into_iter()
                                    .map(|car| {
                                        let id = car.car_id;
                                        let picked = move || spot.with(|s| s.car.as_ref().is_some_and(|c| c.car_id == id));
                                        let rate = car.car_type.as_ref().map_or(0.0, |t| t.daily_rate);
                                        let plate = car.number_plate.clone().unwrap_or_default();
                                        let label = car.label();
                                        view! {
                                            <button
                                                class="car-list__item"
                                                class:car-list__item--selected=picked
                                                on:click=move |_| spot.update(|s| s.car = Some(car.clone()))
                                            >
                                                <strong>{label}</strong>
                                                <span>{plate}</span>
                                                <span>{format!("{} / day", format_inr(rate))}</span>
                                            </button>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                    <OnSpotAddOns spot=spot add_ons=add_ons/>
                    <PriceSummary quote=quote/>
                </Show>
                <Show when=car_picked>
                    <div class="desk__renter">
                        <form
                            class="lookup-form"
                            on:submit=move |ev: leptos::ev::SubmitEvent| {
                                ev.prevent_default();
                                find_customer(());
                            }
                        >
                            <input
                                class="field__input"
                                type="email"
                                placeholder="customer@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                            <button class="btn" type="submit">
                                "Find customer"
                            </button>
                            <button
                                class="btn"
                                type="button"
                                on:click=move |_| {
                                    customer.set(Customer::blank(email.get_untracked().trim()));
                                    renter.set(Renter::New);
                                }
                            >
                                "Register new customer"
                            </button>
                        </form>
                        {move || match renter.get() {
                            Renter::Unknown => ().into_any(),
                            Renter::Member => {
                                view! {
                                    <p class="desk__member">
                                        <strong>{move || customer.with(Customer::full_name)}</strong>
                                        {move || customer.with(|c| format!(" {} (verified member)", c.email))}
                                    </p>
                                }
                                    .into_any()
                            }
                            Renter::New => view! { <CustomerForm customer=customer errors=errors/> }.into_any(),
                        }}
                        <button
                            class="btn btn--primary"
                            disabled=move || busy.get() || renter.get() == Renter::Unknown
                            on:click=confirm
                        >
                            {move || {
                                let total = quote.get().map(|q| format_inr(q.total)).unwrap_or_default();
                                if busy.get() { "Finalizing...".to_owned() } else { format!("Confirm & hand over ({total})") }
                            }}
                        </button>
                    </div>
                </Show>
            </Show>
        </section>
    }
}

/// Add-on checkboxes for the counter, with the child-seat count.
#[component]
fn OnSpotAddOns(spot: RwSignal<OnSpotBooking>, add_ons: RwSignal<Vec<AddOn>>) -> impl IntoView {
    view! {
        <fieldset class="add-ons">
            <legend>"Extras"</legend>
            {move || {
                add_ons
                    .get()
                    .into_iter()
                    .map(|add_on| {
                        let id = add_on.add_on_id;
                        let child_seat = is_child_seat(&add_on.add_on_name);
                        let selected = move || spot.with(|s| s.add_ons.contains(id));
                        view! {
                            <div class="add-ons__item" class:add-ons__item--selected=selected>
                                <label class="checkbox">
                                    <input
                                        type="checkbox"
                                        prop:checked=selected
                                        on:change=move |_| {
                                            spot.update(|s| {
                                                s.add_ons.toggle(id);
                                            });
                                        }
                                    />
                                    {add_on.add_on_name.clone()}
                                </label>
                                <span class="add-ons__rate">{format!("{} / day", format_inr(add_on.addon_daily_rate))}</span>
                                <Show when=move || child_seat && selected()>
                                    <select
                                        class="add-ons__qty"
                                        prop:value=move || spot.with(|s| s.add_ons.child_seat_qty().to_string())
                                        on:change=move |ev| {
                                            let qty = event_target_value(&ev).parse().unwrap_or(1);
                                            spot.update(|s| s.add_ons.set_child_seat_qty(qty));
                                        }
                                    >
                                        {(1..=MAX_CHILD_SEATS)
                                            .map(|n| view! { <option value=n.to_string()>{format!("{n} seat(s)")}</option> })
                                            .collect_view()}
                                    </select>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </fieldset>
    }
}

// =============================================================================
// CUSTOMER CONTACT
// =============================================================================

#[component]
fn ContactEditor(
    contact: RwSignal<ContactEdit>,
    customer_id: Option<i64>,
    booking: RwSignal<Option<BookingResponse>>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let editing = RwSignal::new(false);
    let saving = RwSignal::new(false);

    let save = move |_| {
        let Some(customer_id) = customer_id else {
            notify(ui, Notice::warning("Error", "No customer ID associated with this booking record. Contact IT."));
            return;
        };
        let edit = contact.get_untracked();
        saving.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api;

            let outcome = async {
                let stored = api::get_customer_by_id(customer_id).await?;
                api::update_customer(customer_id, &edit.apply(stored)).await?;
                let Some(booking_id) = booking.with_untracked(|b| b.as_ref().map(|b| b.booking_id)) else {
                    return Ok(());
                };
                let refreshed = api::get_booking(booking_id).await?;
                booking.set(Some(refreshed));
                Ok::<(), booking::ApiError>(())
            }
            .await;
            match outcome {
                Ok(()) => {
                    notify(ui, Notice::success("Updated!", "Customer details have been updated successfully."));
                    editing.set(false);
                }
                Err(e) => notify(ui, Notice::danger("Error", e.to_string())),
            }
            saving.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (edit, booking);
    };

    let input = move |label: &'static str, get: fn(&ContactEdit) -> String, set: fn(&mut ContactEdit, String)| {
        view! {
            <label class="field">
                <span class="field__label">{label}</span>
                <input
                    class="field__input"
                    type="text"
                    prop:value=move || contact.with(get)
                    on:input=move |ev| contact.update(|c| set(c, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <div class="desk__contact">
            <Show
                when=move || editing.get()
                fallback=move || {
                    view! {
                        <button class="btn" on:click=move |_| editing.set(true)>
                            "Edit customer details"
                        </button>
                    }
                }
            >
                {input("Mobile", |c| c.mobile.clone(), |c, v| c.mobile = v)}
                {input("Driving licence", |c| c.licence.clone(), |c, v| c.licence = v)}
                {input("Address", |c| c.address.clone(), |c, v| c.address = v)}
                {input("City", |c| c.city.clone(), |c, v| c.city = v)}
                {input("Pincode", |c| c.pincode.clone(), |c, v| c.pincode = v)}
                <button class="btn btn--primary" disabled=move || saving.get() on:click=save>
                    "Save"
                </button>
                <button class="btn" on:click=move |_| editing.set(false)>
                    "Cancel"
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
#[path = "staff_dashboard_test.rs"]
mod staff_dashboard_test;
