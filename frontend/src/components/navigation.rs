use crate::state::dropdown::{DropdownState, MenuId, OpenTicket, PanelMeasurement};
use leptos::{html::Div, *};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    New,
    NewHighlighted,
}

impl Badge {
    fn class(&self) -> &'static str {
        match self {
            Badge::New => "new-tag",
            Badge::NewHighlighted => "new-tag yellow",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub label: &'static str,
    pub badge: Option<Badge>,
}

const fn item(label: &'static str) -> NavItem {
    NavItem { label, badge: None }
}

const fn badged(label: &'static str, badge: Badge) -> NavItem {
    NavItem {
        label,
        badge: Some(badge),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NavMenu {
    pub id: MenuId,
    pub label: &'static str,
    pub highlighted: bool,
    pub items: &'static [NavItem],
}

pub const PLAIN_LINKS: &[(&str, bool)] = &[("Home", true), ("NIC Code", false)];

pub const MENUS: &[NavMenu] = &[
    NavMenu {
        id: MenuId::UsefulDocuments,
        label: "Useful Documents",
        highlighted: true,
        items: &[
            item("Important"),
            badged("Udyam Registration Benefits", Badge::New),
            item("Site Highlights"),
            item("Circulars & Orders"),
            item("Udyam Registration Sample form"),
            badged("Udyam Registration Bulletin", Badge::New),
            item("Metadata Compliance"),
        ],
    },
    NavMenu {
        id: MenuId::PrintVerify,
        label: "Print / Verify",
        highlighted: false,
        items: &[
            item("Print Certificate"),
            item("Verify Udyam"),
            item("Download"),
        ],
    },
    NavMenu {
        id: MenuId::UpdateDetails,
        label: "Update Details",
        highlighted: false,
        items: &[
            item("Update Profile"),
            item("Change Address"),
            item("Update Contact"),
        ],
    },
    NavMenu {
        id: MenuId::Login,
        label: "Login",
        highlighted: false,
        items: &[
            item("Officer's Login"),
            badged("EFC's Login", Badge::NewHighlighted),
            badged("NSSH Officer's Login", Badge::NewHighlighted),
            item("Udyami Login"),
        ],
    },
];

#[component]
pub fn NavigationMenu() -> impl IntoView {
    let dropdowns = create_rw_signal(DropdownState::default());

    view! {
        <div class="navbar">
            <div class="navbar-logo">
                <img src="/images/ministry_name.webp" alt="National Emblem" />
            </div>
            <div class="navbar-menu">
                {PLAIN_LINKS
                    .iter()
                    .map(|(label, active)| {
                        let class = if *active { "nav-link active" } else { "nav-link" };
                        view! { <a href="#" class=class>{*label}</a> }
                    })
                    .collect_view()}
                {MENUS
                    .iter()
                    .map(|menu| view! { <NavDropdown menu=*menu state=dropdowns /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn NavDropdown(menu: NavMenu, state: RwSignal<DropdownState>) -> impl IntoView {
    let panel_ref = create_node_ref::<Div>();
    let id = menu.id;

    let on_enter = move |_| {
        if let Some(ticket) = state.try_update(|s| s.open(id)) {
            schedule_measurement(state, panel_ref, ticket);
        }
    };
    let on_click = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        if let Some(ticket) = state.try_update(|s| s.toggle(id)).flatten() {
            schedule_measurement(state, panel_ref, ticket);
        }
    };
    let on_leave = move |_| state.update(DropdownState::close);

    let is_open = move || state.with(|s| s.is_open(id));
    let panel_class = move || state.with(|s| s.alignment(id).panel_class());
    let toggle_class = if menu.highlighted {
        "nav-link dropdown-toggle active"
    } else {
        "nav-link dropdown-toggle"
    };

    view! {
        <div class="nav-dropdown" data-menu=id.key() on:mouseleave=on_leave>
            <a
                href="#"
                class=toggle_class
                aria-haspopup="true"
                aria-expanded=move || is_open().to_string()
                on:click=on_click
                on:mouseenter=on_enter
            >
                {menu.label}
                <span class="dropdown-arrow">"▼"</span>
            </a>
            <Show when=is_open fallback=|| ()>
                <div node_ref=panel_ref class=panel_class>
                    {menu
                        .items
                        .iter()
                        .map(|entry| {
                            view! {
                                <a href="#" class="dropdown-item">
                                    {entry.label}
                                    {entry
                                        .badge
                                        .map(|b| view! { <span class=b.class()>"NEW"</span> })}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

/// Measures the just-opened panel on the next frame, once it has been laid
/// out, and commits the alignment against `ticket`.
fn schedule_measurement(state: RwSignal<DropdownState>, panel: NodeRef<Div>, ticket: OpenTicket) {
    request_animation_frame(move || {
        let measurement = panel.get_untracked().map(|el| PanelMeasurement {
            right: el.get_bounding_client_rect().right(),
        });
        let viewport_width = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|w| w.as_f64())
            .unwrap_or(f64::INFINITY);
        let committed = state
            .try_update(|s| s.commit(ticket, measurement, viewport_width))
            .flatten();
        match committed {
            Some(alignment) => log::debug!(
                "Dropdown '{}' aligned {:?} (right={:?}, viewport={})",
                ticket.menu.key(),
                alignment,
                measurement.map(|m| m.right),
                viewport_width
            ),
            None => log::debug!("Discarded stale measurement for '{}'", ticket.menu.key()),
        }
    });
}
