use listwarden_admin::{AddOptions, AdminError, AdminSession, RemoveOptions, SectionForm};
use listwarden_core::{MemberAddress, PageLayout};
use listwarden_transport::{Method, MockTransport};

fn token_page(token: &str) -> String {
    format!(
        r#"<html><body>
<FORM action="https://lists.example.org/mailman/admin/team/members/add" method="POST">
<input type="hidden" name="csrf_token" value="{token}">
<table><tr><td><textarea name="subscribees"></textarea></td></tr></table>
</FORM></body></html>"#
    )
}

fn chrome(roster: &str) -> String {
    format!(
        r#"<html><body>
<table><tr><td>team mailing list administration</td></tr></table>
<table><tr><td><a href="general">General Options</a></td></tr></table>
<table><tr><td><a href="members/list">Membership List</a></td></tr></table>
<form method="post"><table><tr><td><input name="findmember"></td></tr></table>
<table border="2">{roster}</table></form>
</body></html>"#
    )
}

fn row(addr: &str) -> String {
    format!(r#"<tr><td><input type="checkbox" name="user" value="{addr}"></td><td><a href="/options/{addr}">{addr}</a></td></tr>"#)
}

fn letter_page(list: &[&str]) -> String {
    let mut rows = String::from(
        "<tr><td>total</td></tr><tr><td>letters</td></tr><tr><td>unsub</td><td>address</td></tr>",
    );
    for a in list {
        rows.push_str(&row(a));
    }
    chrome(&rows)
}

fn addrs(list: &[&str]) -> Vec<MemberAddress> {
    list.iter().map(|a| MemberAddress::from(*a)).collect()
}

fn session(mock: MockTransport) -> AdminSession<MockTransport> {
    AdminSession::new(mock, PageLayout::default())
}

#[tokio::test]
async fn test_add_members_fetches_token_then_posts_batch() {
    let result = r#"<html><body>
<h5>Successfully subscribed:</h5>
<ul><li>ann@example.org</li><li>bob@example.org -- Already a member</li></ul>
</body></html>"#;
    let s = session(
        MockTransport::new()
            .with_get("members/add", token_page("tok-add"))
            .with_post("members/add", result),
    );

    let applied = s
        .add_members(
            &addrs(&["ann@example.org", "bob@example.org"]),
            &AddOptions::default(),
        )
        .await
        .unwrap();
    assert_eq!(applied, addrs(&["ann@example.org"]));

    let requests = s.transport().requests().await;
    assert_eq!(requests.len(), 2);
    assert_eq!((requests[0].method, requests[0].path.as_str()), (Method::Get, "members/add"));
    assert_eq!((requests[1].method, requests[1].path.as_str()), (Method::Post, "members/add"));
    assert_eq!(requests[1].field("csrf_token"), Some("tok-add"));
    assert_eq!(
        requests[1].field("subscribees"),
        Some("ann@example.org\nbob@example.org")
    );
}

#[tokio::test]
async fn test_add_members_without_success_heading_is_empty() {
    let s = session(
        MockTransport::new()
            .with_get("members/add", token_page("tok"))
            .with_post("members/add", "<html><body><p>nothing</p></body></html>"),
    );
    let applied = s
        .add_members(&addrs(&["ann@example.org"]), &AddOptions::default())
        .await
        .unwrap();
    assert!(applied.is_empty());
}

#[tokio::test]
async fn test_remove_members_uses_its_own_token() {
    let result = r#"<html><body><h5>Successfully Unsubscribed:</h5>
<ul><li>ann@example.org</li></ul></body></html>"#;
    let s = session(
        MockTransport::new()
            .with_get("members/remove", token_page("tok-rm"))
            .with_post("members/remove", result),
    );

    let options = RemoveOptions {
        send_ack: true,
        notify_owner: false,
    };
    let removed = s
        .remove_members(&addrs(&["ann@example.org"]), &options)
        .await
        .unwrap();
    assert_eq!(removed, addrs(&["ann@example.org"]));

    let requests = s.transport().requests().await;
    assert_eq!(requests[1].field("csrf_token"), Some("tok-rm"));
    assert_eq!(requests[1].field("unsubscribees"), Some("ann@example.org"));
    assert_eq!(requests[1].field("send_unsub_ack_to_this_batch"), Some("1"));
}

#[tokio::test]
async fn test_change_member_confirmed() {
    let s = session(
        MockTransport::new()
            .with_get("members/change", token_page("tok-ch"))
            .with_post(
                "members/change",
                "<html><body><h3>old@example.org changed to new@example.org.</h3></body></html>",
            ),
    );
    let changed = s
        .change_member(
            &MemberAddress::from("old@example.org"),
            &MemberAddress::from("new@example.org"),
        )
        .await
        .unwrap();
    assert!(changed);

    let requests = s.transport().requests().await;
    assert_eq!(requests[1].field("change_from"), Some("old@example.org"));
    assert_eq!(requests[1].field("change_to"), Some("new@example.org"));
}

#[tokio::test]
async fn test_change_member_without_confirmation_heading_fails() {
    let s = session(
        MockTransport::new()
            .with_get("members/change", token_page("tok"))
            .with_post("members/change", "<html><body><p>error</p></body></html>"),
    );
    let err = s
        .change_member(
            &MemberAddress::from("old@example.org"),
            &MemberAddress::from("new@example.org"),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AdminError::Scrape(_)));
}

#[tokio::test]
async fn test_list_members_paginated() {
    let root = chrome(
        r#"<tr><td>4 members total</td></tr>
<tr><td><a href="members?letter=a">A</a> <a href="members?letter=b">B</a></td></tr>"#,
    );
    let s = session(
        MockTransport::new()
            .with_get("members", root)
            .with_get("members?letter=a", letter_page(&["amy@example.org"]))
            .with_get("members?letter=b", letter_page(&["bob@example.org", "bea@example.org"])),
    );

    let members = s.list_members().await.unwrap();
    assert_eq!(
        members,
        addrs(&["amy@example.org", "bob@example.org", "bea@example.org"])
    );

    let paths: Vec<_> = s
        .transport()
        .requests()
        .await
        .into_iter()
        .map(|r| r.path)
        .collect();
    assert_eq!(paths, vec!["members", "members?letter=a", "members?letter=b"]);
}

#[tokio::test]
async fn test_list_members_query_only_letter_links() {
    let root = chrome(
        r#"<tr><td>3 members total</td></tr>
<tr><td><a href="?letter=a">A</a> <a href="?letter=b">B</a></td></tr>"#,
    );
    let s = session(
        MockTransport::new()
            .with_get("members", root)
            .with_get("members?letter=a", letter_page(&["amy@example.org"]))
            .with_get("members?letter=b", letter_page(&["bob@example.org"])),
    );

    let members = s.list_members().await.unwrap();
    assert_eq!(members, addrs(&["amy@example.org", "bob@example.org"]));

    let paths: Vec<_> = s
        .transport()
        .requests()
        .await
        .into_iter()
        .map(|r| r.path)
        .collect();
    assert_eq!(paths, vec!["members", "members?letter=a", "members?letter=b"]);
}

#[tokio::test]
async fn test_list_members_aborts_on_failed_sub_page() {
    let root = chrome(
        r#"<tr><td>total</td></tr>
<tr><td><a href="members?letter=a">A</a> <a href="members?letter=b">B</a></td></tr>"#,
    );
    let s = session(
        MockTransport::new()
            .with_get("members", root)
            .with_get("members?letter=a", "<html><p>session expired</p></html>"),
    );

    let err = s.list_members().await.unwrap_err();
    assert!(matches!(err, AdminError::Scrape(_)));
    // The second letter page is never requested.
    assert_eq!(s.transport().requests().await.len(), 2);
}

#[tokio::test]
async fn test_submit_config_prepends_token() {
    let s = session(
        MockTransport::new()
            .with_get("bounce", token_page("tok-b"))
            .with_post("bounce", "<html><p>saved</p></html>"),
    );

    let page = s.submit_config(&SectionForm::bounce()).await.unwrap();
    assert_eq!(page.status, 200);

    let requests = s.transport().requests().await;
    let posted = &requests[1];
    assert_eq!(posted.path, "bounce");
    assert_eq!(posted.form[0], ("csrf_token".to_string(), "tok-b".to_string()));
    assert_eq!(posted.field("bounce_processing"), Some("1"));
    assert_eq!(
        posted.form.last(),
        Some(&("submit".to_string(), "Send".to_string()))
    );
}

#[tokio::test]
async fn test_login_then_operation_order() {
    let roster = format!(
        "<tr><td>1 member</td></tr><tr><td>address</td></tr>{}",
        row("ann@example.org")
    );
    let s = session(
        MockTransport::new()
            .with_post("", "<html><p>welcome</p></html>")
            .with_get("members", chrome(&roster)),
    );

    s.login("pw").await.unwrap();
    let members = s.list_members().await.unwrap();
    assert_eq!(members, addrs(&["ann@example.org"]));

    let requests = s.transport().requests().await;
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[1].path, "members");
}
