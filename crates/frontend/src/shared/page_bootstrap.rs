use contracts::shared::page_data::PageData;

const PAGE_DATA_ELEMENT_ID: &str = "page-data";

/// Read the lists the server rendered into `<script id="page-data">`.
pub fn load_page_data() -> PageData {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(PAGE_DATA_ELEMENT_ID))
        .and_then(|el| el.text_content());

    let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
        log::warn!("#{} is missing, starting with empty lists", PAGE_DATA_ELEMENT_ID);
        return PageData::default();
    };

    match PageData::from_json(&text) {
        Ok(data) => {
            log::info!("Booking panel: {:?}", data.panel);
            data
        }
        Err(e) => {
            log::error!("Failed to parse #{}: {}", PAGE_DATA_ELEMENT_ID, e);
            PageData::default()
        }
    }
}
