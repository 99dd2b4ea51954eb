//! View models and Leptos components for the landing page
//!
//! The presenter is a pure function of [`FormState`]: the same state always
//! renders the same markup. A field with an error gets the error border, the
//! error icon and its message; a valid field gets none of them.
//!
//! [`FieldView`] and [`FormView`] are plain data. The components below turn
//! them into markup, and [`LandingPage::render`] produces the page as an HTML
//! string through Leptos server-side rendering.

use leptos::prelude::*;

use crate::field::{Field, InputType};
use crate::form::FormState;

const INPUT_CLASS: &str = "h-14 px-5 focus-visible:ring-1 focus-visible:ring-offset-0";
const INPUT_BORDER_CLASS: &str = "border-gray-400 border-[1px]";
const INPUT_ERROR_CLASS: &str = "border-red-500 border-2 focus-visible:ring-red-500";
const ICON_CLASS: &str = "absolute right-8 top-1/2 -translate-y-1/2";
const MESSAGE_CLASS: &str = "text-sm font-medium text-red-500 italic text-right";

/// Path of the inline error icon.
pub const ERROR_ICON_SRC: &str = "images/icon-error.svg";

/// Page headline.
pub const HEADLINE: &str = "Learn to code by watching others";
/// Lead paragraph under the headline.
pub const LEAD: &str = "See how experienced developers solve problems in real-time. \
    Watching scripted tutorials is great, but understanding how developers think is invaluable.";
/// Submit control label.
pub const SUBMIT_LABEL: &str = "Claim your free trial";

/// How one input renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    /// The field
    pub field: Field,
    /// Input control kind
    pub input_type: InputType,
    /// Placeholder text
    pub placeholder: &'static str,
    /// Text bound to the control; `None` for secret fields
    pub value: Option<String>,
    /// CSS classes for the input
    pub class: String,
    /// Whether the inline error icon is shown
    pub show_error_icon: bool,
    /// Error message shown under the input
    pub message: Option<String>,
}

impl FieldView {
    /// View of one field in the given state.
    pub fn new(field: Field, state: &FormState) -> Self {
        let message = state.errors().message(field).map(str::to_string);
        // the error border replaces the normal one rather than stacking on it
        let class = if message.is_some() {
            format!("{INPUT_CLASS} {INPUT_ERROR_CLASS}")
        } else {
            format!("{INPUT_BORDER_CLASS} {INPUT_CLASS}")
        };
        let value = (!field.is_secret()).then(|| state.values().get(field).to_string());

        Self {
            field,
            input_type: field.input_type(),
            placeholder: field.label(),
            value,
            class,
            show_error_icon: message.is_some(),
            message,
        }
    }

    /// Whether the field is in the error state.
    pub fn has_error(&self) -> bool {
        self.message.is_some()
    }
}

/// How the whole form renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    /// One view per field, in form order
    pub fields: Vec<FieldView>,
}

impl FormView {
    /// View of the form in the given state.
    pub fn from_state(state: &FormState) -> Self {
        Self {
            fields: Field::ALL
                .into_iter()
                .map(|field| FieldView::new(field, state))
                .collect(),
        }
    }

    /// The view of one field.
    pub fn field(&self, field: Field) -> Option<&FieldView> {
        self.fields.iter().find(|view| view.field == field)
    }

    /// Markup for the `<form>` element.
    pub fn to_html(&self) -> String {
        let form = self.clone();
        view! { <TrialForm form=form /> }.to_html()
    }
}

/// One input with its error icon and message.
#[component]
pub fn FieldInput(
    /// What to show
    field: FieldView,
) -> impl IntoView {
    let invalid = field.has_error().then_some("true");
    let icon = field.show_error_icon.then(|| {
        view! { <img src=ERROR_ICON_SRC alt="icon-error" class=ICON_CLASS /> }
    });
    let message = field
        .message
        .map(|message| view! { <p class=MESSAGE_CLASS>{message}</p> });

    view! {
        <div class="space-y-2">
            <div class="relative">
                <input
                    type=field.input_type.as_str()
                    name=field.field.name()
                    placeholder=field.placeholder
                    class=field.class
                    value=field.value
                    aria-invalid=invalid
                />
                {icon}
            </div>
            {message}
        </div>
    }
}

/// The registration form: four inputs, the submit control and the terms notice.
#[component]
pub fn TrialForm(
    /// Field views in form order
    form: FormView,
) -> impl IntoView {
    let fields = form
        .fields
        .into_iter()
        .map(|field| view! { <FieldInput field=field /> })
        .collect_view();

    view! {
        <form novalidate=true class="w-full px-6 bg-white py-6 space-y-4 rounded-[10px] xl:px-10 xl:py-9">
            {fields}
            <button type="submit" class="w-full uppercase h-[52px] text-base tracking-[.5px]">
                {SUBMIT_LABEL}
            </button>
            <p class="text-center text-gray-400 text-[11px] mx-5 leading-[19px]">
                "By clicking the button, you are agreeing to our "
                <span class="font-semibold">"Terms and Services"</span>
            </p>
        </form>
    }
}

/// Marketing copy on one side, the pricing banner and the form on the other.
#[component]
pub fn TrialPage(form: FormView) -> impl IntoView {
    view! {
        <div class="min-h-screen flex justify-center">
            <section class="w-[327px] font-poppins mt-[92px] xl:w-[1106px] xl:flex xl:justify-between">
                <div class="w-full text-center text-white grid gap-y-6 xl:w-[496px] xl:text-left">
                    <h2 class="text-[26px] font-bold xl:text-[50px]">{HEADLINE}</h2>
                    <p class="leading-[26px]">{LEAD}</p>
                </div>
                <div class="w-full grid gap-y-6 mt-16 xl:mt-0 xl:w-[540px]">
                    <p class="w-full text-white text-center text-[15px] leading-[25px] px-14">
                        <span class="font-bold">"Try it free 7 days"</span>
                        " then $20/mo. thereafter"
                    </p>
                    <TrialForm form=form />
                </div>
            </section>
        </div>
    }
}

/// The full marketing page around the form.
#[derive(Debug, Clone, Copy, Default)]
pub struct LandingPage;

impl LandingPage {
    /// Markup for the page body in the given state.
    pub fn render(state: &FormState) -> String {
        let form = FormView::from_state(state);
        view! { <TrialPage form=form /> }.to_html()
    }
}
