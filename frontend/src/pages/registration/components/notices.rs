use leptos::*;

const INSTRUCTIONS: &[&str] = &[
    "The Aadhaar number shall be of the proprietor in the case of a proprietorship firm, of the managing partner in the case of a partnership firm and of a karta in the case of a Hindu Undivided Family (HUF).",
    "In case of a Company or a Limited Liability Partnership or a Cooperative Society or a Society or a Trust, the organisation or its authorised signatory shall provide its GSTIN(As per applicablity of CGST Act 2017 and as notified by the ministry of MSME vide S.O. 1055(E) dated 05th March 2021) and PAN along with its Aadhaar number.",
];

const CONSENT_EN: &str = "I, the holder of the above Aadhaar, hereby give my consent to Ministry of MSME, Government of India, for using my Aadhaar number as alloted by UIDAI for Udyam Registration. NIC / Ministry of MSME, Government of India, have informed me that my aadhaar data will not be stored/shared.";
const CONSENT_HI: &str = "मैं, आधार धारक, इस प्रकार उद्यम पंजीकरण के लिए यूआईडीएआई के साथ अपने आधार संख्या का उपयोग करने के लिए सू०ल०म० उ० मंत्रालय, भारत सरकार को अपनी सहमति देता हूं। एनआईसी / सू०ल०म० उ० मंत्रालय, भारत सरकार ने मुझे सूचित किया है कि मेरा आधार डेटा संग्रहीत / साझा नहीं किया जाएगा।";

#[component]
pub fn ImportantInformation() -> impl IntoView {
    view! {
        <div class="instructions">
            <h3>{"Important Information:"}</h3>
            <ul>
                {INSTRUCTIONS.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn ConsentCheckbox(consent: Signal<bool>, on_toggle: Callback<bool>) -> impl IntoView {
    view! {
        <div class="consent-section">
            <label class="consent-checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || consent.get()
                    on:change=move |ev| on_toggle.call(event_target_checked(&ev))
                />
                <span class="checkmark"></span>
                <span class="consent-text">
                    {CONSENT_EN}
                    <br/>
                    {CONSENT_HI}
                </span>
            </label>
        </div>
    }
}

#[component]
pub fn ExcludedActivitiesTicker() -> impl IntoView {
    view! {
        <div class="footer-text">
            <div class="scrolling-text">
                {"Activities (NIC codes) not covered under MSMED Act, 2006 for Udyam Registration"}
            </div>
        </div>
    }
}
