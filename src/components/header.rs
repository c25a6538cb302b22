use dioxus::prelude::*;

#[component]
pub fn HeaderWithBackButton(
    title: Option<String>,
    progress: Option<f64>,
    on_back: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div {
            class: "screen-header",

            if let Some(on_back) = on_back {
                button {
                    class: "header-back-button",
                    aria_label: "Back",
                    onclick: move |_| on_back.call(()),
                    "←"
                }
            }

            if let Some(title) = title {
                h2 { class: "header-title", "{title}" }
            }

            if let Some(progress) = progress {
                div {
                    class: "header-progress",
                    div {
                        class: "header-progress-fill",
                        style: "width: {progress * 100.0}%",
                    }
                }
            }
        }
    }
}
