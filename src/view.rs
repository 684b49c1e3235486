//! Yew components: the income, saving and category forms and the category list.

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::InputEvent;
use yew::prelude::*;

use crate::api::HttpFinanceApi;
use crate::config::{load_config, ClientConfig};
use crate::handlers;
use crate::models::{CategoryCard, StatusMessage};
use crate::sync::CategorySynchronizer;

#[derive(Clone, Copy, PartialEq)]
pub enum EntryKind {
    Income,
    Saving,
}

impl EntryKind {
    fn title(&self) -> &'static str {
        match self {
            EntryKind::Income => "Registrar ingreso",
            EntryKind::Saving => "Registrar ahorro",
        }
    }

    fn input_id(&self) -> &'static str {
        match self {
            EntryKind::Income => "income-amount",
            EntryKind::Saving => "saving-amount",
        }
    }

    fn status_id(&self) -> &'static str {
        match self {
            EntryKind::Income => "income-status",
            EntryKind::Saving => "saving-status",
        }
    }
}

fn page_shell(title: &'static str, children: Html) -> Html {
    html! {
        <div class="p-6 max-w-7xl mx-auto">
            <div class="flex items-center justify-between pb-4 border-b border-border">
                <h1 class="text-2xl font-bold text-foreground">{ title }</h1>
            </div>
            <div class="pt-5 space-y-6">
                { children }
            </div>
        </div>
    }
}

fn text_input(id: &'static str, kind: &'static str, placeholder: &'static str, value: UseStateHandle<String>) -> Html {
    let oninput = {
        let value = value.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            value.set(input.value());
        })
    };
    html! {
        <input id={id} type={kind} placeholder={placeholder} value={(*value).clone()} oninput={oninput}
            class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[11px] text-[#173E63] border-none" />
    }
}

#[derive(Properties, PartialEq)]
pub struct AmountFormProps {
    pub kind: EntryKind,
}

/// Income or saving form with its status indicator.
#[function_component(AmountForm)]
pub fn amount_form(props: &AmountFormProps) -> Html {
    let api = use_context::<HttpFinanceApi>()
        .unwrap_or_else(|| HttpFinanceApi::from_config(&load_config()));
    let amount = use_state(String::new);
    let status = use_state(|| None::<StatusMessage>);
    let kind = props.kind;

    let on_submit = {
        let amount = amount.clone();
        let status = status.clone();
        Callback::from(move |_| {
            // forwarded exactly as typed
            let amount_val = (*amount).clone();
            let status = status.clone();
            let api = api.clone();
            spawn_local(async move {
                let result = match kind {
                    EntryKind::Income => handlers::add_income(&api, &amount_val).await,
                    EntryKind::Saving => handlers::add_saving(&api, &amount_val).await,
                };
                match result {
                    Ok(message) => status.set(Some(message)),
                    Err(err) => tracing::error!(error = %err, "submission failed"),
                }
            });
        })
    };

    html! {
        <div class="bg-white p-5 rounded-[10px] shadow-sm border border-white/50">
            <div class="flex items-center gap-2 mb-3">
                <div class="p-1.5 bg-[#f1f5f9] rounded-lg">{ icon_wallet() }</div>
                <h4 class="text-[#1D617A] font-bold text-[15px] tracking-wider">{ kind.title() }</h4>
            </div>
            <div class="space-y-1 mb-4">
                <label class="text-[12px] font-bold text-muted-foreground">{"Monto"}</label>
                { text_input(kind.input_id(), "number", "0.00", amount) }
            </div>
            <button onclick={on_submit} class="w-full bg-[#173E63] text-white py-2 rounded-[10px] text-[10px] font-bold flex items-center justify-center gap-2">
                { icon_plus() }{"Guardar"}
            </button>
            <p id={kind.status_id()} class="text-sm text-muted-foreground mt-3">
                { status.map(|s| s.text()).unwrap_or_default() }
            </p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoryFormProps {
    /// Receives `(name, monthly)` exactly as typed.
    pub on_submit: Callback<(String, String)>,
}

#[function_component(CategoryForm)]
pub fn category_form(props: &CategoryFormProps) -> Html {
    let name = use_state(String::new);
    let monthly = use_state(String::new);

    let on_click = {
        let name = name.clone();
        let monthly = monthly.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |_| on_submit.emit(((*name).clone(), (*monthly).clone())))
    };

    html! {
        <div class="bg-white p-5 rounded-[10px] shadow-sm border border-white/50">
            <div class="flex items-center gap-2 mb-3">
                <div class="p-1.5 bg-[#f1f5f9] rounded-lg">{ icon_target() }</div>
                <h4 class="text-[#1D617A] font-bold text-[15px] tracking-wider">{"Nueva categoría"}</h4>
            </div>
            <div class="grid grid-cols-2 gap-3 mb-4">
                <div class="space-y-1">
                    <label class="text-[12px] font-bold text-muted-foreground">{"Nombre"}</label>
                    { text_input("cat-name", "text", "Arriendo", name) }
                </div>
                <div class="space-y-1">
                    <label class="text-[12px] font-bold text-muted-foreground">{"Meta mensual"}</label>
                    { text_input("cat-monthly", "number", "0.00", monthly) }
                </div>
            </div>
            <button onclick={on_click} class="w-full bg-[#173E63] text-white py-2 rounded-[10px] text-[10px] font-bold flex items-center justify-center gap-2">
                { icon_plus() }{"Agregar categoría"}
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoryListProps {
    pub cards: Vec<CategoryCard>,
}

#[function_component(CategoryList)]
pub fn category_list(props: &CategoryListProps) -> Html {
    html! {
        <div id="cat-list" class="grid grid-cols-1 md:grid-cols-3 gap-4">
            { for props.cards.iter().enumerate().map(|(idx, card)| html! {
                <div key={idx} class="card bg-white p-5 rounded-[10px] shadow-sm border border-white/50">
                    <b class="text-[#173E63]">{ card.name.clone() }</b>
                    <br />
                    <span class="text-sm text-muted-foreground">{ card.goal_label() }</span>
                </div>
            }) }
        </div>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let config: Rc<ClientConfig> = use_memo(|_| load_config(), ());
    let api = HttpFinanceApi::from_config(&config);
    let policy = config.refresh_policy;
    let sync = use_memo(|_| CategorySynchronizer::new(), ());
    let cards = use_state(Vec::<CategoryCard>::new);

    {
        let api = api.clone();
        let sync = sync.clone();
        let cards = cards.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    if let Err(err) = sync.refresh(&api, &cards).await {
                        tracing::error!(error = %err, "initial category load failed");
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_add_category = {
        let api = api.clone();
        let sync = sync.clone();
        let cards = cards.clone();
        Callback::from(move |(name, monthly): (String, String)| {
            let api = api.clone();
            let sync = sync.clone();
            let cards = cards.clone();
            spawn_local(async move {
                match handlers::add_category(&api, &sync, &cards, policy, &name, &monthly).await {
                    Ok(submission) => tracing::debug!(?submission, "category flow finished"),
                    Err(err) => tracing::error!(error = %err, "category flow failed"),
                }
            });
        })
    };

    html! {
        <ContextProvider<HttpFinanceApi> context={api}>
            <div class="min-h-screen bg-background">
                { page_shell(
                    "Mis finanzas",
                    html! {
                        <>
                            <div class="grid grid-cols-1 lg:grid-cols-3 gap-4 items-stretch">
                                <AmountForm kind={EntryKind::Income} />
                                <AmountForm kind={EntryKind::Saving} />
                                <CategoryForm on_submit={on_add_category} />
                            </div>
                            <div class="space-y-3">
                                <h3 class="font-bold text-lg text-foreground">{"Categorías"}</h3>
                                <CategoryList cards={(*cards).clone()} />
                            </div>
                        </>
                    }
                ) }
            </div>
        </ContextProvider<HttpFinanceApi>>
    }
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="text-foreground">
            <path d={path}></path>
        </svg>
    }
}

fn icon_wallet() -> Html {
    icon_base("M3 7h18v10H3zM16 7V5H5v2")
}
fn icon_target() -> Html {
    icon_base("M12 12m-9 0a9 9 0 1018 0 9 9 0 10-18 0")
}
fn icon_plus() -> Html {
    icon_base("M12 5v14M5 12h14")
}
