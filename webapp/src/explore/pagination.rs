use dioxus::prelude::*;

use common::{i18n::Locale, pagination::Pager};

use crate::shared::scroll_to_top;

// ListingPagination
//
// previous/next and numbered page buttons.  only intents the pager accepts are passed on,
// and each of those scrolls the window back to the top
#[derive(Clone, PartialEq, Props)]
pub struct ListingPaginationProps {
    pager: Pager,
    locale: Locale,
    onchange: EventHandler<u32>,
}

#[component]
pub fn ListingPagination(props: ListingPaginationProps) -> Element {
    let pager = props.pager;
    let locale = props.locale;
    let onchange = props.onchange;

    let change = move |intent: Option<u32>| {
        if let Some(page) = intent {
            onchange.call(page);
            scroll_to_top();
        }
    };

    let prev_label = locale.pick("Previous", "Zurück");
    let next_label = locale.pick("Next", "Weiter");

    rsx! {
        nav { class: "pagination",
            button {
                class: "btn btn-sm btn-secondary",
                disabled: !pager.has_prev(),
                onclick: move |_| change(pager.prev()),
                "{prev_label}"
            }
            for page in pager.pages() {
                button {
                    key: "{page}",
                    class: if page == pager.current() { "btn btn-sm active" } else { "btn btn-sm btn-secondary" },
                    onclick: move |_| change(pager.go_to(page)),
                    "{page}"
                }
            }
            button {
                class: "btn btn-sm btn-secondary",
                disabled: !pager.has_next(),
                onclick: move |_| change(pager.next()),
                "{next_label}"
            }
        }
    }
}
