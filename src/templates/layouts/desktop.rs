use maud::{html, Markup, DOCTYPE};

const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #111827; }
header { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
header nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }
main.container { max-width: 1200px; margin: 0 auto; padding: 1.5rem; }
.card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem 1.5rem; margin-bottom: 2rem; }
.table-wrap { max-height: 480px; overflow: auto; }
table { border-collapse: collapse; width: 100%; font-size: 0.9em; }
th { position: sticky; top: 0; background: #f9fafb; text-align: left; padding: 8px; border-bottom: 2px solid #e5e7eb; }
td { padding: 6px 8px; border-bottom: 1px solid #f3f4f6; }
td.num { text-align: right; font-variant-numeric: tabular-nums; }
.muted { color: #6b7280; font-size: 0.9em; }
.verdict-true { color: #047857; }
.verdict-false { color: #b91c1c; }
.verdict-inconclusive { color: #6b7280; }
form.filters { display: flex; gap: 1rem; align-items: end; flex-wrap: wrap; margin-bottom: 1rem; }
figure { margin: 0; }
svg { max-width: 100%; height: auto; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (maud::PreEscaped(STYLES)) }
            }
            body {
                header {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                        path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                        path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                    }
                    h3 { "House Rocket" }
                    nav {
                        ul {
                            li { a href="/" { "Dashboard" } }
                            li { a href="/map" { "Map" } }
                            li { a href="/data" { "Data" } }
                            li { a href="/reports" { "Reports" } }
                            li { a href="/hypotheses" { "Hypotheses" } }
                        }
                    }
                }
                main class="container" {
                    (content)
                }
            }
        }
    }
}
