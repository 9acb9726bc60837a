use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// How long a toast stays on screen before auto-dismissing.
pub const TOAST_TIMEOUT_MS: u32 = 2_000;

/// Visual flavour of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn alert_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Error => "alert-error",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: String,
    pub kind: ToastKind,
    pub on_dismiss: Callback<()>,
}

/// Top-center toast that dismisses itself after [`TOAST_TIMEOUT_MS`].
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.message.clone(), move |_| {
            let timeout = Timeout::new(TOAST_TIMEOUT_MS, move || on_dismiss.emit(()));
            move || drop(timeout)
        });
    }

    html! {
        <div class="toast toast-top toast-center z-50">
            <div class={classes!("alert", props.kind.alert_class())}>
                <span>{ props.message.clone() }</span>
            </div>
        </div>
    }
}
