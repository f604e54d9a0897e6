//! Page shells.

#[derive(Debug, Clone, Copy)]
pub struct NavItem<'a> {
    pub label: &'a str,
    pub href: &'a str,
}

const PUBLIC_NAV: &[NavItem<'static>] = &[NavItem {
    label: "병원 찾기",
    href: "/hospitals",
}];

const ADMIN_NAV: &[NavItem<'static>] = &[
    NavItem {
        label: "방문 요청",
        href: "/admin",
    },
    NavItem {
        label: "병원 등록",
        href: "/admin/hospitals/new",
    },
    NavItem {
        label: "사이트로 돌아가기",
        href: "/hospitals",
    },
];

fn nav(items: &[NavItem<'_>]) -> String {
    let links: String = items
        .iter()
        .map(|item| {
            format!(
                r#"<li><a href="{}">{}</a></li>"#,
                crate::attr(item.href),
                crate::text(item.label)
            )
        })
        .collect();
    format!("<nav><ul>{links}</ul></nav>")
}

fn document(title: &str, body_class: &str, nav_html: &str, body: &str) -> String {
    format!(
        concat!(
            "<!doctype html>",
            r#"<html lang="ko"><head><meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>{title}</title></head>",
            r#"<body class="{class}">{nav}<main>{body}</main></body></html>"#
        ),
        title = crate::text(title),
        class = body_class,
        nav = nav_html,
        body = body
    )
}

/// Public page. `body` is trusted, already-rendered HTML.
pub fn page(title: &str, body: &str) -> String {
    document(title, "site", &nav(PUBLIC_NAV), body)
}

/// Admin shell with the admin navigation sidebar.
pub fn admin_page(title: &str, body: &str) -> String {
    let sidebar = format!(r#"<aside class="admin-sidebar">{}</aside>"#, nav(ADMIN_NAV));
    document(&format!("{title} | 관리자"), "admin", &sidebar, body)
}
