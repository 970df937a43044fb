use std::time::Duration;

use dioxus::prelude::*;

use crate::domain::Rotation;

/// Cross-fades through `images`, one step per `interval`.
#[component]
pub fn ImageRotator(images: Vec<String>, interval: Duration) -> Element {
    let count = images.len();
    let mut rotation = use_signal(|| Rotation::new(count));

    // Restarts whenever the image count or the interval changes.
    let _timer = use_resource(use_reactive!(|(count, interval)| async move {
        rotation.with_mut(|r| r.resize(count));
        if !rotation.peek().needs_timer() {
            return;
        }
        loop {
            tokio::time::sleep(interval).await;
            rotation.with_mut(Rotation::advance);
        }
    }));

    if count == 0 {
        return rsx! { Fragment {} };
    }

    let current = rotation();
    rsx! {
        div {
            class: "rotating-card",
            for (idx, src) in images.into_iter().enumerate() {
                img {
                    key: "{src}-{idx}",
                    class: if current.is_active(idx) { "rotating-card-image active" } else { "rotating-card-image" },
                    src: "{src}",
                    alt: "Featured card {idx + 1}",
                }
            }
        }
    }
}
