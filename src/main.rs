use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

mod api;
mod model;
mod notify;
mod store;
mod view;

use model::{Category, Expense, NewExpense, User};
use notify::{NotificationStack, Notices, NoticesAction};
use store::{ExpenseStore, StoreAction};

#[derive(Clone, Copy, PartialEq)]
enum AuthStatus {
    Checking,
    Authenticated,
    Unauthenticated,
}

fn navigate_to(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|window| window.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

fn today_iso() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

fn avatar_url(user: &User) -> String {
    match &user.picture {
        Some(picture) if !picture.is_empty() => picture.clone(),
        _ => format!(
            "https://ui-avatars.com/api/?name={}",
            String::from(js_sys::encode_uri_component(&user.name))
        ),
    }
}

#[function_component(App)]
fn app() -> Html {
    let auth_status = use_state(|| AuthStatus::Checking);
    let current_user = use_state(|| None::<User>);

    {
        let auth_status = auth_status.clone();
        let current_user = current_user.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    // A failed check is treated as "not logged in"; no retry.
                    match api::fetch_user().await {
                        Ok(user) => {
                            current_user.set(Some(user));
                            auth_status.set(AuthStatus::Authenticated);
                        }
                        Err(_) => auth_status.set(AuthStatus::Unauthenticated),
                    }
                });
                || ()
            },
            (),
        );
    }

    match *auth_status {
        AuthStatus::Checking => html! {
            <div class="min-h-screen flex items-center justify-center bg-slate-950 text-slate-400">
                {"Checking session..."}
            </div>
        },
        AuthStatus::Unauthenticated => html! { <LoginScreen /> },
        AuthStatus::Authenticated => match &*current_user {
            Some(user) => html! { <AppScreen user={user.clone()} /> },
            None => html! {},
        },
    }
}

#[function_component(LoginScreen)]
fn login_screen() -> Html {
    let on_login = Callback::from(|_| navigate_to("/login"));

    html! {
        <div class="min-h-screen flex items-center justify-center bg-slate-950">
            <div class="w-full max-w-md bg-slate-900 border border-slate-800 rounded-2xl shadow-lg p-8 text-center">
                <div class="text-5xl mb-4">{"💰"}</div>
                <h1 class="text-2xl font-bold text-white">{"Expense Tracker"}</h1>
                <p class="text-sm text-slate-400 mt-2 mb-6">{"Track your spending, one expense at a time."}</p>
                <button onclick={on_login} class="w-full bg-indigo-600 text-white py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity">
                    {"Sign in with Google"}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    user: User,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let on_logout = Callback::from(|_| navigate_to("/logout"));

    html! {
        <header class="bg-slate-900 border-b border-slate-800 h-16 flex items-center justify-between px-6">
            <div class="flex items-center gap-2">
                <span class="text-2xl">{"💰"}</span>
                <span class="text-white text-lg font-bold tracking-tight">{"Expense Tracker"}</span>
            </div>
            <div class="flex items-center gap-3">
                <img src={avatar_url(&props.user)} alt="Avatar" class="w-9 h-9 rounded-full object-cover" />
                <span class="text-sm text-slate-300 font-medium">{ &props.user.name }</span>
                <button onclick={on_logout} class="ml-2 text-sm text-slate-400 hover:text-white transition-colors">
                    {"Log out"}
                </button>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    title: &'static str,
    value: String,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-slate-900 p-6 rounded-xl border border-slate-800">
            <p class="text-slate-400 text-[11px] font-bold uppercase tracking-widest mb-1">{ props.title }</p>
            <h3 class="text-2xl font-bold text-white tracking-tight">{ &props.value }</h3>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AppScreenProps {
    user: User,
}

#[function_component(AppScreen)]
fn app_screen(props: &AppScreenProps) -> Html {
    let store = use_reducer(ExpenseStore::default);
    let notices = use_reducer(Notices::default);

    let form_title = use_state(|| "".to_string());
    let form_amount = use_state(|| "".to_string());
    let form_category = use_state(|| Category::Food);
    let form_date = use_state(today_iso);
    let form_description = use_state(|| "".to_string());
    let editing = use_state(|| None::<i64>);

    {
        let store = store.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api::fetch_expenses().await {
                        Ok(list) => store.dispatch(StoreAction::Replace(list)),
                        // Keep whatever is already on screen.
                        Err(err) => {
                            gloo_console::error!("Failed to load expenses:", err.to_string())
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let reset_form = {
        let form_title = form_title.clone();
        let form_amount = form_amount.clone();
        let form_category = form_category.clone();
        let form_date = form_date.clone();
        let form_description = form_description.clone();
        let editing = editing.clone();
        Callback::from(move |_: ()| {
            form_title.set("".to_string());
            form_amount.set("".to_string());
            form_category.set(Category::Food);
            form_date.set(today_iso());
            form_description.set("".to_string());
            editing.set(None);
        })
    };

    let on_submit = {
        let store = store.clone();
        let notices = notices.clone();
        let form_title = form_title.clone();
        let form_amount = form_amount.clone();
        let form_category = form_category.clone();
        let form_date = form_date.clone();
        let form_description = form_description.clone();
        let editing = editing.clone();
        let reset_form = reset_form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // The only client-side check: the amount must parse as a number.
            let amount = match form_amount.trim().parse::<f64>() {
                Ok(value) => value,
                Err(_) => {
                    notices.dispatch(NoticesAction::error("Amount must be a number"));
                    return;
                }
            };

            let fields = NewExpense {
                title: (*form_title).clone(),
                amount,
                category: *form_category,
                date: (*form_date).clone(),
                description: (*form_description).clone(),
            };

            let store = store.clone();
            let notices = notices.clone();
            let reset_form = reset_form.clone();
            let editing_id = *editing;
            spawn_local(async move {
                match editing_id {
                    Some(id) => match api::update_expense(id, &fields).await {
                        Ok(updated) => {
                            store.dispatch(StoreAction::Update(updated));
                            reset_form.emit(());
                            notices.dispatch(NoticesAction::success("Expense updated"));
                        }
                        Err(_) => {
                            notices.dispatch(NoticesAction::error("Failed to update expense"))
                        }
                    },
                    None => match api::create_expense(&fields).await {
                        Ok(created) => {
                            store.dispatch(StoreAction::Insert(created));
                            reset_form.emit(());
                            notices
                                .dispatch(NoticesAction::success("Expense added successfully!"));
                        }
                        Err(_) => notices.dispatch(NoticesAction::error("Failed to add expense")),
                    },
                }
            });
        })
    };

    let on_edit = {
        let form_title = form_title.clone();
        let form_amount = form_amount.clone();
        let form_category = form_category.clone();
        let form_date = form_date.clone();
        let form_description = form_description.clone();
        let editing = editing.clone();
        Callback::from(move |expense: Expense| {
            form_title.set(expense.title.clone());
            form_amount.set(format!("{}", expense.amount));
            form_category.set(expense.category);
            form_date.set(expense.date.clone());
            form_description.set(expense.description.clone());
            editing.set(Some(expense.id));
        })
    };

    let on_delete = {
        let store = store.clone();
        let notices = notices.clone();
        Callback::from(move |id: i64| {
            if !confirm("Are you sure you want to delete this expense?") {
                return;
            }
            let store = store.clone();
            let notices = notices.clone();
            spawn_local(async move {
                match api::delete_expense(id).await {
                    Ok(()) => {
                        store.dispatch(StoreAction::Remove(id));
                        notices.dispatch(NoticesAction::success("Expense deleted"));
                    }
                    Err(_) => notices.dispatch(NoticesAction::error("Failed to delete expense")),
                }
            });
        })
    };

    let on_dismiss_notice = {
        let notices = notices.clone();
        Callback::from(move |id: usize| notices.dispatch(NoticesAction::Dismiss(id)))
    };

    let stats = view::stats(&store.expenses);
    let categories = view::category_totals(&store.expenses);
    let months = view::monthly_totals(&store.expenses);
    let sorted = view::sorted_by_date(&store.expenses);

    html! {
        <div class="min-h-screen bg-slate-950">
            <Header user={props.user.clone()} />
            <NotificationStack notices={notices.items.clone()} on_dismiss={on_dismiss_notice} />

            <main class="p-6 max-w-5xl mx-auto space-y-6">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    <StatCard title="Total Spent" value={view::format_amount(stats.total)} />
                    <StatCard title="Expenses" value={stats.count.to_string()} />
                    <StatCard title="Average" value={view::format_amount(stats.average)} />
                </div>

                <div class="bg-slate-900 rounded-xl border border-slate-800 p-6">
                    <h3 class="font-bold text-white text-lg mb-4">
                        { if editing.is_some() { "Edit Expense" } else { "Add Expense" } }
                    </h3>
                    <form onsubmit={on_submit}>
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-3 mb-4">
                            <input placeholder="Title" value={(*form_title).clone()} oninput={{
                                let form_title = form_title.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    form_title.set(input.value());
                                })
                            }} class="bg-slate-800 text-white rounded-lg px-3 py-2 text-sm border border-slate-700" />
                            <input type="number" step="0.01" placeholder="Amount" value={(*form_amount).clone()} oninput={{
                                let form_amount = form_amount.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    form_amount.set(input.value());
                                })
                            }} class="bg-slate-800 text-white rounded-lg px-3 py-2 text-sm border border-slate-700" />
                            <select onchange={{
                                let form_category = form_category.clone();
                                Callback::from(move |e: Event| {
                                    let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                    form_category.set(Category::from(input.value()));
                                })
                            }} class="bg-slate-800 text-white rounded-lg px-3 py-2 text-sm border border-slate-700">
                                { for Category::ALL.iter().map(|cat| html! {
                                    <option value={cat.label()} selected={*form_category == *cat}>
                                        { format!("{} {}", cat.emoji(), cat.label()) }
                                    </option>
                                }) }
                            </select>
                            <input type="date" value={(*form_date).clone()} oninput={{
                                let form_date = form_date.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    form_date.set(input.value());
                                })
                            }} class="bg-slate-800 text-white rounded-lg px-3 py-2 text-sm border border-slate-700" />
                        </div>
                        <input placeholder="Description (optional)" value={(*form_description).clone()} oninput={{
                            let form_description = form_description.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                form_description.set(input.value());
                            })
                        }} class="w-full bg-slate-800 text-white rounded-lg px-3 py-2 text-sm border border-slate-700 mb-4" />
                        <div class="flex gap-3">
                            <button type="submit" class="bg-indigo-600 text-white px-5 py-2 rounded-lg text-sm font-bold hover:opacity-90 transition-opacity">
                                { if editing.is_some() { "Update Expense" } else { "Add Expense" } }
                            </button>
                            { if editing.is_some() {
                                html! {
                                    <button type="button" onclick={{
                                        let reset_form = reset_form.clone();
                                        Callback::from(move |_| reset_form.emit(()))
                                    }} class="bg-slate-700 text-slate-200 px-5 py-2 rounded-lg text-sm font-bold hover:opacity-90 transition-opacity">
                                        {"Cancel"}
                                    </button>
                                }
                            } else { html! {} } }
                        </div>
                    </form>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    <div class="bg-slate-900 rounded-xl border border-slate-800 p-6">
                        <h3 class="font-bold text-white text-lg mb-4">{"Spending by Category"}</h3>
                        { if categories.is_empty() {
                            html! { <p class="text-sm text-slate-500">{"No category data yet"}</p> }
                        } else {
                            html! {
                                <div class="grid grid-cols-2 md:grid-cols-3 gap-3">
                                    { for categories.iter().map(|(category, total)| html! {
                                        <div class="bg-slate-800 rounded-lg p-4 text-center">
                                            <span class="text-2xl">{ category.emoji() }</span>
                                            <div class="text-sm text-slate-300 mt-1">{ category.label() }</div>
                                            <div class="text-white font-semibold">{ view::format_amount(*total) }</div>
                                        </div>
                                    }) }
                                </div>
                            }
                        }}
                    </div>

                    <div class="bg-slate-900 rounded-xl border border-slate-800 p-6">
                        <h3 class="font-bold text-white text-lg mb-4">{"Monthly Breakdown"}</h3>
                        { if months.is_empty() {
                            html! { <p class="text-sm text-slate-500">{"No monthly data yet"}</p> }
                        } else {
                            html! {
                                <ul class="space-y-2">
                                    { for months.iter().map(|(month, total)| html! {
                                        <li class="flex items-center justify-between text-sm">
                                            <span class="text-slate-300">{ month.clone() }</span>
                                            <span class="text-white font-semibold">{ view::format_amount(*total) }</span>
                                        </li>
                                    }) }
                                </ul>
                            }
                        }}
                    </div>
                </div>

                <div class="bg-slate-900 rounded-xl border border-slate-800 overflow-hidden">
                    <div class="p-6 border-b border-slate-800">
                        <h3 class="font-bold text-white text-lg">{"Expenses"}</h3>
                    </div>
                    { if sorted.is_empty() {
                        html! {
                            <div class="p-10 text-center">
                                <div class="text-4xl mb-2">{"💸"}</div>
                                <p class="text-slate-400">{"No expenses yet. Start tracking your spending!"}</p>
                            </div>
                        }
                    } else {
                        html! {
                            <div class="divide-y divide-slate-800">
                                { for sorted.iter().map(|expense| {
                                    let on_edit = on_edit.clone();
                                    let on_delete = on_delete.clone();
                                    let this = expense.clone();
                                    let id = expense.id;
                                    html! {
                                        <div key={expense.id} class="flex items-center gap-4 px-6 py-4 hover:bg-slate-800/40 transition-colors">
                                            <span class="text-2xl">{ expense.category.emoji() }</span>
                                            <div class="flex-1 min-w-0">
                                                <h4 class="text-white font-semibold truncate">{ &expense.title }</h4>
                                                <p class="text-xs text-slate-400">
                                                    { expense.category.label() }
                                                    { " • " }
                                                    { view::format_date(&expense.date) }
                                                    { if expense.description.is_empty() {
                                                        html! {}
                                                    } else {
                                                        html! { <>{ " • " }{ &expense.description }</> }
                                                    }}
                                                </p>
                                            </div>
                                            <span class="text-white font-bold">{ view::format_amount(expense.amount) }</span>
                                            <button onclick={Callback::from(move |_| on_edit.emit(this.clone()))}
                                                class="text-xs text-slate-400 hover:text-white transition-colors">
                                                {"Edit"}
                                            </button>
                                            <button onclick={Callback::from(move |_| on_delete.emit(id))}
                                                class="text-xs text-red-400 hover:text-red-300 transition-colors">
                                                {"Delete"}
                                            </button>
                                        </div>
                                    }
                                }) }
                            </div>
                        }
                    }}
                </div>
            </main>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
