use maud::{Markup, html};

pub fn render_index_template(title: String) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/styles.css";
            title { (title) }
            script src="static/scorecards.js" defer {}
        }
        body {
            h1 {
                (title)
            }
            div id="stats" {
                p class="loading" { "Loading statistics..." }
            }
            div id="scorecards" {
                p class="loading" { "Loading scorecards..." }
            }
        }
    }
}
