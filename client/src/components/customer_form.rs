//! Driver, licence, and payment fields bound to one `Customer` signal.

use booking::Customer;
use booking::validate::FieldErrors;
use leptos::prelude::*;

type Getter = fn(&Customer) -> String;
type Setter = fn(&mut Customer, String);

fn opt(value: String) -> Option<String> {
    Some(value)
}

#[component]
fn CustomerInput(
    customer: RwSignal<Customer>,
    errors: Signal<FieldErrors>,
    label: &'static str,
    name: &'static str,
    get: Getter,
    set: Setter,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] required: bool,
    #[prop(optional)] readonly: bool,
) -> impl IntoView {
    let error = move || errors.with(|e| e.get(name).map(str::to_owned));
    view! {
        <label class="field" class:field--invalid=move || error().is_some()>
            <span class="field__label">
                {label}
                <Show when=move || required>
                    <span class="field__required">" *"</span>
                </Show>
            </span>
            <input
                class="field__input"
                type=kind
                name=name
                readonly=readonly
                prop:value=move || customer.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    customer.update(|c| set(c, value));
                }
            />
            <Show when=move || error().is_some()>
                <span class="field__error">{move || error().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}

#[component]
pub fn CustomerForm(
    customer: RwSignal<Customer>,
    #[prop(into)] errors: Signal<FieldErrors>,
    /// Lock the email, which identifies the customer record.
    #[prop(optional)]
    lock_email: bool,
) -> impl IntoView {
    view! {
        <div class="customer-form">
            <fieldset class="customer-form__section">
                <legend>"Personal details"</legend>
                <CustomerInput customer=customer errors=errors label="First name" name="firstName" required=true
                    get=|c| c.first_name.clone() set=|c, v| c.first_name = v/>
                <CustomerInput customer=customer errors=errors label="Last name" name="lastName" required=true
                    get=|c| c.last_name.clone() set=|c, v| c.last_name = v/>
                <CustomerInput customer=customer errors=errors label="Email" name="email" kind="email" required=true readonly=lock_email
                    get=|c| c.email.clone() set=|c, v| c.email = v/>
                <CustomerInput customer=customer errors=errors label="Mobile number" name="mobileNumber" kind="tel" required=true
                    get=|c| c.mobile_number.clone() set=|c, v| c.mobile_number = v/>
                <CustomerInput customer=customer errors=errors label="Phone number" name="phoneNumber" kind="tel"
                    get=|c| c.phone_number.clone().unwrap_or_default() set=|c, v| c.phone_number = opt(v)/>
                <CustomerInput customer=customer errors=errors label="Date of birth" name="dateOfBirth" kind="date" required=true
                    get=|c| c.date_of_birth.clone() set=|c, v| c.date_of_birth = v/>
            </fieldset>
            <fieldset class="customer-form__section">
                <legend>"Address"</legend>
                <CustomerInput customer=customer errors=errors label="Address line 1" name="addressLine1" required=true
                    get=|c| c.address_line1.clone() set=|c, v| c.address_line1 = v/>
                <CustomerInput customer=customer errors=errors label="Address line 2" name="addressLine2"
                    get=|c| c.address_line2.clone().unwrap_or_default() set=|c, v| c.address_line2 = opt(v)/>
                <CustomerInput customer=customer errors=errors label="City" name="city"
                    get=|c| c.city.clone().unwrap_or_default() set=|c, v| c.city = opt(v)/>
                <CustomerInput customer=customer errors=errors label="Pincode" name="pincode"
                    get=|c| c.pincode.clone().unwrap_or_default() set=|c, v| c.pincode = opt(v)/>
            </fieldset>
            <fieldset class="customer-form__section">
                <legend>"Driving licence"</legend>
                <CustomerInput customer=customer errors=errors label="Licence number" name="drivingLicenseNumber" required=true
                    get=|c| c.driving_license_number.clone() set=|c, v| c.driving_license_number = v/>
                <CustomerInput customer=customer errors=errors label="Issued by" name="issuedByDL" required=true
                    get=|c| c.issued_by_dl.clone() set=|c, v| c.issued_by_dl = v/>
                <CustomerInput customer=customer errors=errors label="Valid through" name="validThroughDL" kind="date" required=true
                    get=|c| c.valid_through_dl.clone() set=|c, v| c.valid_through_dl = v/>
                <CustomerInput customer=customer errors=errors label="International permit" name="idpNumber"
                    get=|c| c.idp_number.clone().unwrap_or_default() set=|c, v| c.idp_number = opt(v)/>
            </fieldset>
            <fieldset class="customer-form__section">
                <legend>"Passport (international travellers)"</legend>
                <CustomerInput customer=customer errors=errors label="Passport number" name="passportNumber"
                    get=|c| c.passport_number.clone().unwrap_or_default() set=|c, v| c.passport_number = opt(v)/>
                <CustomerInput customer=customer errors=errors label="Issued by" name="passportIssuedBy"
                    get=|c| c.passport_issued_by.clone().unwrap_or_default() set=|c, v| c.passport_issued_by = opt(v)/>
                <CustomerInput customer=customer errors=errors label="Issue date" name="passportIssueDate" kind="date"
                    get=|c| c.passport_issue_date.clone().unwrap_or_default() set=|c, v| c.passport_issue_date = opt(v)/>
                <CustomerInput customer=customer errors=errors label="Valid through" name="passportValidThrough" kind="date"
                    get=|c| c.passport_valid_through.clone().unwrap_or_default()
                    set=|c, v| c.passport_valid_through = opt(v)/>
            </fieldset>
            <fieldset class="customer-form__section">
                <legend>"Payment"</legend>
                <label class="field">
                    <span class="field__label">"Card type"</span>
                    <select
                        class="field__input"
                        prop:value=move || customer.with(|c| c.credit_card_type.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            customer.update(|c| c.credit_card_type = value);
                        }
                    >
                        <option value="VISA">"Visa"</option>
                        <option value="MASTERCARD">"Mastercard"</option>
                        <option value="AMEX">"American Express"</option>
                        <option value="RUPAY">"RuPay"</option>
                    </select>
                </label>
                <CustomerInput customer=customer errors=errors label="Card number" name="creditCardNumber" required=true
                    get=|c| c.credit_card_number.clone() set=|c, v| c.credit_card_number = v/>
            </fieldset>
        </div>
    }
}
