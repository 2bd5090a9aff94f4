//! Contact Form Component
//!
//! Validated locally; a valid submission shows a confirmation for a few
//! seconds and clears the form.

use leptos::*;

use crate::state::contact::{error_for, ContactForm, Field, FieldError, SUCCESS_VISIBLE_MS};
use crate::state::use_page_state;

#[component]
pub fn ContactFormPanel() -> impl IntoView {
    let page = use_page_state();
    let form = page.contact;
    let errors = create_rw_signal(Vec::<FieldError>::new());
    let (success, set_success) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        match form.with_untracked(ContactForm::validate) {
            Ok(()) => {
                errors.set(Vec::new());
                form.update(ContactForm::reset);
                set_success.set(true);

                gloo_timers::callback::Timeout::new(SUCCESS_VISIBLE_MS, move || {
                    set_success.set(false);
                })
                .forget();
            }
            Err(found) => errors.set(found),
        }
    };

    view! {
        <form class="contact-form" on:submit=on_submit novalidate=true>
            <FormField field=Field::Name label="Name" errors=errors>
                <input
                    type="text"
                    id=Field::Name.id()
                    name=Field::Name.id()
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
            </FormField>

            <FormField field=Field::Email label="Email" errors=errors>
                <input
                    type="email"
                    id=Field::Email.id()
                    name=Field::Email.id()
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
            </FormField>

            <FormField field=Field::Subject label="Subject" errors=errors>
                <input
                    type="text"
                    id=Field::Subject.id()
                    name=Field::Subject.id()
                    prop:value=move || form.with(|f| f.subject.clone())
                    on:input=move |ev| form.update(|f| f.subject = event_target_value(&ev))
                />
            </FormField>

            <FormField field=Field::Message label="Message" errors=errors>
                <textarea
                    id=Field::Message.id()
                    name=Field::Message.id()
                    rows="5"
                    prop:value=move || form.with(|f| f.message.clone())
                    on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                />
            </FormField>

            <button type="submit" class="submit-btn">"Send Message"</button>

            <div class="form-success" class:visible=success role="status">
                "Thank you! Your message has been sent. We'll be in touch soon."
            </div>
        </form>
    }
}

/// Label, control and validation message for one field
#[component]
fn FormField(
    field: Field,
    label: &'static str,
    errors: RwSignal<Vec<FieldError>>,
    children: Children,
) -> impl IntoView {
    let message = move || errors.with(|e| error_for(e, field));

    view! {
        <div class="form-group" class:invalid=move || message().is_some()>
            <label for=field.id()>{label}</label>
            {children()}
            {move || message().map(|text| view! { <span class="field-error">{text}</span> })}
        </div>
    }
}
