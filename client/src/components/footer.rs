use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"© Alex Kowalski"</p>
            <ul class="footer-links">
                <li><a href="https://github.com/" rel="noopener" target="_blank">"GitHub"</a></li>
                <li><a href="https://www.linkedin.com/" rel="noopener" target="_blank">"LinkedIn"</a></li>
            </ul>
        </footer>
    }
}
