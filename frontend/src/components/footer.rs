use leptos::*;

pub const CONTACT_LINES: &[&str] = &["Ministry of MSME", "Udyog bhawan - New Delhi"];
pub const CONTACT_EMAIL: &str = "champions@gov.in";

pub const SERVICES: &[&str] = &[
    "CHAMPIONS",
    "MSME Samadhaan",
    "MSME Sambandh",
    "MSME Dashboard",
    "Entrepreneurship Skill Development Programme (ESDP)",
];

#[component]
pub fn PageFooter() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-main">
                <div class="footer-container">
                    <div class="footer-column">
                        <h3 class="footer-title">{"UDYAM REGISTRATION"}</h3>
                        <div class="contact-info">
                            {CONTACT_LINES.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}
                            <p>
                                {"Email: "}
                                <a href=format!("mailto:{}", CONTACT_EMAIL)>{CONTACT_EMAIL}</a>
                            </p>
                        </div>
                        <div class="contact-links">
                            <p><strong>{"Contact Us"}</strong></p>
                            <p><strong>{"For Grievances / Problems"}</strong></p>
                        </div>
                    </div>

                    <div class="footer-column">
                        <h3 class="footer-title">{"Our Services"}</h3>
                        <ul class="services-list">
                            {SERVICES
                                .iter()
                                .map(|service| view! { <li><a href="#">{*service}</a></li> })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="footer-column">
                        <h3 class="footer-title">{"Video"}</h3>
                        <VideoPlaceholder/>
                    </div>
                </div>
            </div>

            <div class="footer-bottom">
                <div class="copyright-text">
                    <p>
                        {"© Copyright "}<strong>{"Udyam Registration"}</strong>
                        {". All Rights Reserved, Website Content Managed by Ministry of Micro Small and Medium Enterprises, GoI"}
                    </p>
                    <p>
                        {"Website hosted & managed by "}
                        <a href="#">{"National Informatics Centre"}</a>
                        {", "}
                        <a href="#">{"Ministry of Communications and IT, Government of India"}</a>
                    </p>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn VideoPlaceholder() -> impl IntoView {
    view! {
        <div class="video-container">
            <div class="video-player">
                <div class="video-thumbnail">
                    <div class="video-content">
                        <div class="video-title">{"Udyam Registration"}</div>
                        <div class="video-url">{"www.udyamregistration.gov.in"}</div>
                    </div>
                </div>
                <div class="video-controls">
                    <div class="control-bar">
                        <button class="play-btn">"▶"</button>
                        <span class="time">"0:00"</span>
                        <div class="progress-bar">
                            <div class="progress-fill"></div>
                            <div class="progress-scrubber"></div>
                        </div>
                        <span class="duration">"0:47"</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn footer_renders_configured_services() {
        let html = render_to_string(|| view! { <PageFooter/> });
        for service in SERVICES {
            assert!(html.contains(service), "{service}");
        }
        assert_eq!(html.matches("<li").count(), SERVICES.len());
    }

    #[test]
    fn footer_renders_contact_block() {
        let html = render_to_string(|| view! { <PageFooter/> });
        assert!(html.contains("Udyog bhawan - New Delhi"));
        assert!(html.contains("mailto:champions@gov.in"));
        assert!(html.contains("National Informatics Centre"));
    }
}
