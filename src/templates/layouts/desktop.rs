use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (STYLES) }
            }
            body {
                header class="topbar" {
                    h3 { "Property Price Report" }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/reload-data" { "Reload data" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}

const STYLES: &str = "\
body { font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem; color: #222; }
.topbar { display: flex; align-items: center; justify-content: space-between; padding: 0.5rem 0; border-bottom: 1px solid #ddd; }
.topbar nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }
.card { border: 1px solid #ddd; border-radius: 8px; padding: 1rem; margin: 1rem 0; }
table { border-collapse: collapse; width: 100%; }
th, td { text-align: left; padding: 0.4rem 0.6rem; border-bottom: 1px solid #eee; }
td.num, th.num { text-align: right; }
.flash { padding: 0.6rem 1rem; border-radius: 6px; margin: 1rem 0; }
.flash-success { background: #d1fae5; color: #065f46; }
.flash-warning { background: #fef3c7; color: #92400e; }
.flash-danger { background: #fee2e2; color: #991b1b; }
";
