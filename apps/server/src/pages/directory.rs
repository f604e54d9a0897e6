//! Public directory pages.

use axum::response::Html;
use carefind_ui::{attr, highlight_html, page, text, HospitalCardImage};

use super::optional;
use crate::models::{Hospital, HospitalDetail};

fn search_form(query: &str) -> String {
    format!(
        concat!(
            r#"<form class="search" method="get" action="/hospitals">"#,
            r#"<input type="search" name="q" value="{}" placeholder="병원 이름 또는 주소">"#,
            r#"<button type="submit">검색</button></form>"#
        ),
        attr(query)
    )
}

fn hospital_card(hospital: &Hospital, query: &str) -> String {
    let image = HospitalCardImage::new(hospital.image_url.as_deref(), hospital.name.clone());
    let name_en = hospital
        .name_en
        .as_deref()
        .map(|en| format!(r#"<p class="name-en">{}</p>"#, highlight_html(en, query)))
        .unwrap_or_default();

    format!(
        concat!(
            r#"<li class="hospital-card"><a href="/hospitals/{id}">"#,
            "{image}<h3>{name}</h3>{name_en}",
            r#"<p class="address">{address}</p></a></li>"#
        ),
        id = hospital.id,
        image = image.render(),
        name = highlight_html(&hospital.name, query),
        name_en = name_en,
        address = highlight_html(&hospital.address, query),
    )
}

/// `/hospitals` listing, with search hits highlighted.
pub fn hospital_list(hospitals: &[Hospital], query: Option<&str>) -> Html<String> {
    let query = query.unwrap_or_default();

    let results = if hospitals.is_empty() {
        r#"<p class="empty">검색 결과가 없습니다.</p>"#.to_string()
    } else {
        let cards: String = hospitals.iter().map(|h| hospital_card(h, query)).collect();
        format!(r#"<ul class="hospital-list">{cards}</ul>"#)
    };

    let body = format!(
        "<h1>병원 찾기</h1>{}<p class=\"count\">{}개 병원</p>{}",
        search_form(query),
        hospitals.len(),
        results
    );
    Html(page("병원 찾기", &body))
}

/// `/hospitals/:id` detail page.
pub fn hospital_detail(detail: &HospitalDetail) -> Html<String> {
    let hospital = &detail.hospital;
    let image = HospitalCardImage::new(hospital.image_url.as_deref(), hospital.name.clone());

    let departments = if detail.departments.is_empty() {
        "<p>등록된 진료과가 없습니다.</p>".to_string()
    } else {
        let items: String = detail
            .departments
            .iter()
            .map(|d| format!("<li>{}</li>", text(&d.name)))
            .collect();
        format!(r#"<ul class="departments">{items}</ul>"#)
    };

    let body = format!(
        concat!(
            r#"<article class="hospital-detail" data-hospital-id="{id}">"#,
            "{image}<h1>{name}</h1>",
            r#"<p class="name-en">{name_en}</p>"#,
            "<dl><dt>주소</dt><dd>{address}</dd><dt>전화</dt><dd>{phone}</dd></dl>",
            "<h2>진료과</h2>{departments}</article>"
        ),
        id = hospital.id,
        image = image.render(),
        name = text(&hospital.name),
        name_en = optional(hospital.name_en.as_deref()),
        address = text(&hospital.address),
        phone = optional(hospital.phone.as_deref()),
        departments = departments,
    );
    Html(page(&hospital.name, &body))
}
