//! The reorderable list of bio items in the customize view.
//!
//! Rows are native HTML5 drag sources and drop targets. The board decides what
//! a drop means; this component only feeds it indices and cursor offsets and
//! surfaces the resulting ticket through `on_reorder`.

use dioxus::prelude::*;
use store::{BioItem, ItemKind, ReorderTicket};

use crate::icons::{
    FaEnvelope, FaFacebook, FaGlobe, FaGripVertical, FaInstagram, FaLink, FaLinkedin, FaTrash,
    FaWhatsapp, FaXTwitter, FaYoutube,
};
use crate::link_board::use_link_board;
use crate::Icon;

/// Fixed row height the drop-half math divides against. Must match the
/// `.link-row` height in linkleaf.css.
const ROW_HEIGHT: f64 = 56.0;

/// Icon for one bio item: the provider mark for socials, a generic link for
/// everything else. Providers outside the catalog fall back to a globe.
pub fn provider_icon(item: &BioItem, size: u32) -> Element {
    if item.kind == ItemKind::Link {
        return rsx! { Icon { icon: FaLink, width: size, height: size } };
    }
    match item.label.as_str() {
        "Instagram" => rsx! { Icon { icon: FaInstagram, width: size, height: size } },
        "Facebook" => rsx! { Icon { icon: FaFacebook, width: size, height: size } },
        "X" => rsx! { Icon { icon: FaXTwitter, width: size, height: size } },
        "WhatsApp" => rsx! { Icon { icon: FaWhatsapp, width: size, height: size } },
        "YouTube" => rsx! { Icon { icon: FaYoutube, width: size, height: size } },
        "LinkedIn" => rsx! { Icon { icon: FaLinkedin, width: size, height: size } },
        "Email" => rsx! { Icon { icon: FaEnvelope, width: size, height: size } },
        _ => rsx! { Icon { icon: FaGlobe, width: size, height: size } },
    }
}

fn kind_label(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Social => "social",
        ItemKind::Link => "link",
    }
}

#[component]
pub fn LinkList(
    on_reorder: EventHandler<ReorderTicket>,
    on_delete: EventHandler<BioItem>,
) -> Element {
    let mut board = use_link_board();
    let items = board().items().to_vec();
    let dragging = board().drag_source();

    if items.is_empty() {
        return rsx! {
            div {
                class: "link-list-empty",
                "Nothing here yet. Add a link or a social profile below."
            }
        };
    }

    rsx! {
        ul {
            class: "link-list",
            for (index, item) in items.into_iter().enumerate() {
                li {
                    key: "{item.order_id}",
                    class: if dragging == Some(index) { "link-row dragging" } else { "link-row" },
                    draggable: "true",
                    ondragstart: move |_| board.write().drag_start(index),
                    ondragover: move |evt| evt.prevent_default(),
                    ondrop: move |evt| {
                        evt.prevent_default();
                        let offset_y = evt.data().element_coordinates().y;
                        // Bind before calling out so the write borrow is gone
                        let ticket = board.write().drop_on(index, offset_y, ROW_HEIGHT);
                        if let Some(ticket) = ticket {
                            on_reorder.call(ticket);
                        }
                    },
                    ondragend: move |_| board.write().drag_end(),

                    span {
                        class: "link-row-grip",
                        Icon { icon: FaGripVertical, width: 14, height: 14 }
                    }
                    a {
                        class: "link-row-body",
                        href: "{item.url}",
                        target: "_blank",
                        // A drop fires a click on the row right after; the
                        // guard keeps it from navigating away mid-save.
                        onclick: move |evt| {
                            if board().click_guard() {
                                evt.prevent_default();
                            }
                        },
                        span { class: "link-row-icon", {provider_icon(&item, 16)} }
                        span { class: "link-row-label", "{item.label}" }
                        span { class: "link-row-kind", "{kind_label(item.kind)}" }
                    }
                    button {
                        class: "link-row-delete",
                        title: "Remove",
                        onclick: {
                            let item = item.clone();
                            move |evt: MouseEvent| {
                                evt.stop_propagation();
                                on_delete.call(item.clone());
                            }
                        },
                        Icon { icon: FaTrash, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}
