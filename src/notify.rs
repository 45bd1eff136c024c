use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// How long a notice stays on screen before the exit transition starts.
const DISMISS_MS: u32 = 3000;
/// Length of the exit transition before the notice is removed.
const EXIT_MS: u32 = 300;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct Notice {
    pub id: usize,
    pub message: String,
    pub kind: NoticeKind,
}

/// Stack of transient notices. No queue, no dedup; every push gets its own
/// toast and its own dismiss timer.
#[derive(Clone, PartialEq, Default)]
pub struct Notices {
    pub items: Vec<Notice>,
    seq: usize,
}

pub enum NoticesAction {
    Push { message: String, kind: NoticeKind },
    Dismiss(usize),
}

impl NoticesAction {
    pub fn success(message: impl Into<String>) -> Self {
        NoticesAction::Push {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        NoticesAction::Push {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }
}

impl Reducible for Notices {
    type Action = NoticesAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NoticesAction::Push { message, kind } => {
                next.seq += 1;
                next.items.push(Notice {
                    id: next.seq,
                    message,
                    kind,
                });
            }
            NoticesAction::Dismiss(id) => next.items.retain(|n| n.id != id),
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationStackProps {
    pub notices: Vec<Notice>,
    pub on_dismiss: Callback<usize>,
}

#[function_component(NotificationStack)]
pub fn notification_stack(props: &NotificationStackProps) -> Html {
    html! {
        <div class="fixed top-5 right-5 z-50 flex flex-col items-end gap-2">
            { for props.notices.iter().map(|notice| html! {
                <Toast key={notice.id} notice={notice.clone()} on_dismiss={props.on_dismiss.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastProps {
    notice: Notice,
    on_dismiss: Callback<usize>,
}

#[function_component(Toast)]
fn toast(props: &ToastProps) -> Html {
    let leaving = use_state(|| false);

    {
        let leaving = leaving.clone();
        let on_dismiss = props.on_dismiss.clone();
        let id = props.notice.id;
        use_effect_with_deps(
            move |_| {
                let exit = Timeout::new(DISMISS_MS, move || leaving.set(true));
                let remove = Timeout::new(DISMISS_MS + EXIT_MS, move || on_dismiss.emit(id));
                exit.forget();
                remove.forget();
                || ()
            },
            (),
        );
    }

    let color = match props.notice.kind {
        NoticeKind::Success => "bg-emerald-500",
        NoticeKind::Error => "bg-red-500",
    };
    let motion = if *leaving {
        "opacity-0 translate-x-4"
    } else {
        "opacity-100"
    };

    html! {
        <div class={format!("px-6 py-3 rounded-xl text-white font-semibold shadow-lg transition-all duration-300 {} {}", color, motion)}>
            { &props.notice.message }
        </div>
    }
}
