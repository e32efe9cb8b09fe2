use maud::{html, Markup, PreEscaped, DOCTYPE};

// htmx leaves 4xx responses unswapped; show filter errors in place.
const SWAP_BAD_REQUESTS: &str = r#"
document.addEventListener("htmx:beforeSwap", function (evt) {
  if (evt.detail.xhr.status === 400) {
    evt.detail.shouldSwap = true;
    evt.detail.isError = false;
  }
});
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {};
                script { (PreEscaped(SWAP_BAD_REQUESTS)) }
            }
            body {
              header class="flex items-center justify-between px-6 py-3 shadow" {
                  h3 { "Rental Listings" }
                  nav {
                      ul {
                          li { a href="/" { "Listings" } }
                          li { a href="/liked" { "Liked" } }
                      }
                  }
              }
                (content)
            }
        }
    }
}
