//! Admin pages: visit request inbox and hospital registration form.

use axum::response::Html;
use carefind_ui::{admin_page, attr, text, ErrorMessage};

use super::optional;
use crate::{
    messages,
    models::{Hospital, RequestWithHospital},
    services::HospitalDraft,
};

pub fn admin_requests(requests: &[RequestWithHospital]) -> Html<String> {
    let rows: String = requests
        .iter()
        .map(|r| {
            let preferred = r
                .request
                .preferred_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string());
            format!(
                concat!(
                    "<tr><td>{created}</td>",
                    r#"<td><a href="/hospitals/{hospital_id}">{hospital}</a></td>"#,
                    "<td>{kind}</td><td>{name}</td><td>{phone}</td>",
                    "<td>{preferred}</td><td>{message}</td></tr>"
                ),
                created = r.request.created_at.format("%Y-%m-%d %H:%M"),
                hospital_id = r.hospital.id,
                hospital = text(&r.hospital.name),
                kind = text(&r.request.kind),
                name = text(&r.request.name),
                phone = text(&r.request.phone),
                preferred = optional(preferred.as_deref()),
                message = optional(r.request.message.as_deref()),
            )
        })
        .collect();

    let table = if requests.is_empty() {
        r#"<p class="empty">접수된 요청이 없습니다.</p>"#.to_string()
    } else {
        format!(
            concat!(
                r#"<table class="requests"><thead><tr>"#,
                "<th>접수일</th><th>병원</th><th>유형</th><th>이름</th>",
                "<th>연락처</th><th>희망 일시</th><th>메시지</th>",
                "</tr></thead><tbody>{}</tbody></table>"
            ),
            rows
        )
    };

    Html(admin_page(
        "방문 요청",
        &format!("<h1>방문 요청</h1>{table}"),
    ))
}

/// What the registration form shows after a GET or a submission.
#[derive(Debug, Default)]
pub struct HospitalFormView<'a> {
    /// Values echoed back into the inputs.
    pub values: Option<&'a HospitalDraft>,
    pub error: Option<&'a str>,
    pub created: Option<&'a Hospital>,
}

fn input(label: &str, name: &str, value: Option<&str>, required: bool) -> String {
    format!(
        r#"<label>{label}<input type="text" name="{name}" value="{value}"{required}></label>"#,
        label = text(label),
        name = name,
        value = attr(value.unwrap_or_default()),
        required = if required { " required" } else { "" },
    )
}

pub fn hospital_form(view: HospitalFormView<'_>) -> Html<String> {
    // Successful submissions clear the inputs.
    let values = view
        .values
        .filter(|_| view.created.is_none())
        .cloned()
        .unwrap_or_default();

    let error = view
        .error
        .map(|message| {
            ErrorMessage::new(message)
                .with_title(messages::HOSPITAL_CREATE_FAILED)
                .render()
        })
        .unwrap_or_default();

    let created = view
        .created
        .map(|h| {
            format!(
                r#"<p class="notice" role="status">{} <a href="/hospitals/{}">{}</a></p>"#,
                text(messages::HOSPITAL_CREATED),
                h.id,
                text(&h.name)
            )
        })
        .unwrap_or_default();

    let body = format!(
        concat!(
            "<h1>병원 등록</h1>{created}{error}",
            r#"<form class="hospital-form" method="post" action="/admin/hospitals">"#,
            "{name}{address}{phone}",
            r#"<button type="submit">등록</button></form>"#
        ),
        created = created,
        error = error,
        name = input("병원 이름", "name", values.name.as_deref(), true),
        address = input("주소", "address", values.address.as_deref(), true),
        phone = input("전화번호", "phone", values.phone.as_deref(), false),
    );
    Html(admin_page("병원 등록", &body))
}
