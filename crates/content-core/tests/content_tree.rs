use std::fs;
use std::path::Path;

use content_core::{
    CONFIG_SLUGS, CollectionEntry, CollectionItem, CollectionKind, ContentConfig, ContentIndex,
};

fn write(root: &Path, relative: &str, text: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, text).unwrap();
}

fn sample_tree(root: &Path) {
    write(
        root,
        "_site.md",
        "---\ncategories:\n  - 诗歌\n  - 散文\nlinks:\n  github: https://github.com/example\n---\n",
    );
    write(
        root,
        "poem/_index.yml",
        "title: 诗歌\ncollections:\n  - id: X\n    title: 第一集\n",
    );
    write(
        root,
        "poem/X/index.md",
        "---\ntitle: 目录\n---\n[一](/article/poem/X/01-a)\n[二](/article/poem/X/02-b)\n",
    );
    write(root, "poem/X/01-a.md", "第一首");
    write(root, "poem/X/02-b.md", "---\ntitle: 第二首\ndate: 2023-05-05\n---\n");
    write(root, "poem/X/00-preface.md", "---\ntitle: 序言\n---\n");
    write(
        root,
        "essays/01-tlon.md",
        "---\ndate: 2024-01-01\nsummary: 乌有之国\n---\n见[第一首](/article/poem/X/01-a)",
    );
    write(
        root,
        "essays/history/index.md",
        "---\ntitle: 永恒史\nsubcategory: true\n---\n",
    );
    write(
        root,
        "essays/history/01-kenning.md",
        "---\nparentSlug: essays/history/index\n---\n",
    );
    write(root, "bio/life.md", "---\ncategory: 生平事迹\n---\n");
}

fn index_for(root: &Path, base_path: &str) -> ContentIndex {
    let config = ContentConfig {
        content_root: root.to_path_buf(),
        base_path: base_path.to_string(),
        ..Default::default()
    };
    ContentIndex::from_config(&config).unwrap()
}

#[tokio::test]
async fn index_excludes_configuration_and_sorts_by_date() {
    let dir = tempfile::tempdir().unwrap();
    sample_tree(dir.path());
    let index = index_for(dir.path(), "");

    let articles = index.build_index().await;
    for article in &articles {
        assert!(!CONFIG_SLUGS.contains(&article.slug.as_str()));
    }
    assert_eq!(articles[0].slug, "essays/01-tlon");
    assert_eq!(articles[1].slug, "poem/X/02-b");
    assert!(articles[2..].iter().all(|a| a.date.is_empty()));

    let essay = &articles[0];
    assert_eq!(essay.title, "tlon");
    assert_eq!(essay.category, "散文");
    assert_eq!(essay.summary, "乌有之国");
}

#[tokio::test]
async fn category_views() {
    let dir = tempfile::tempdir().unwrap();
    sample_tree(dir.path());
    let index = index_for(dir.path(), "");

    let essays = index.articles_in_category("essays").await;
    assert_eq!(essays.len(), 3);
    assert_eq!(index.articles_in_category("散文").await, essays);

    let subcategories = index.subcategories("散文").await;
    assert_eq!(subcategories.len(), 1);
    assert_eq!(subcategories[0].title, "永恒史");

    let children = index.children_of("essays/history/index").await;
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].slug, "essays/history/01-kenning");

    assert_eq!(index.articles_in_category("bio").await.len(), 1);
}

#[tokio::test]
async fn configuration_documents() {
    let dir = tempfile::tempdir().unwrap();
    sample_tree(dir.path());
    let index = index_for(dir.path(), "");

    let site = index.site_config().await;
    assert_eq!(site.categories, vec!["诗歌", "散文"]);
    assert_eq!(
        site.links.get("github").map(String::as_str),
        Some("https://github.com/example")
    );

    let poetry = index.collection_catalog(CollectionKind::Poetry).await;
    assert_eq!(poetry.collections, vec![CollectionEntry::new("X", "第一集")]);

    let fiction = index.collection_catalog(CollectionKind::Fiction).await;
    assert_eq!(fiction, CollectionKind::Fiction.default_catalog());
}

#[tokio::test]
async fn empty_tree_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let index = index_for(dir.path(), "");

    assert!(index.build_index().await.is_empty());
    let site = index.site_config().await;
    assert_eq!(site.categories, vec!["生平事迹", "诗歌", "小说", "散文", "关于本站"]);
    assert!(site.links.is_empty());
    assert!(index.resolve("anything").await.is_none());
}

#[tokio::test]
async fn collection_listing_and_sibling_order() {
    let dir = tempfile::tempdir().unwrap();
    sample_tree(dir.path());
    let index = index_for(dir.path(), "");

    let items = index.collection_items(CollectionKind::Poetry, "X").await;
    assert_eq!(
        items,
        vec![
            CollectionItem::new("poem/X/00-preface", "序言"),
            CollectionItem::new("poem/X/01-a", "a"),
            CollectionItem::new("poem/X/02-b", "第二首"),
        ]
    );

    let order = index.ordered_siblings("poem/X/index").await;
    assert_eq!(order, vec!["poem/X/01-a", "poem/X/02-b"]);

    let neighbors = index.neighbors("poem/X/index", "poem/X/01-a").await;
    assert_eq!(neighbors.previous, None);
    assert_eq!(neighbors.next.as_deref(), Some("poem/X/02-b"));
}

#[tokio::test]
async fn resolve_with_base_path() {
    let dir = tempfile::tempdir().unwrap();
    sample_tree(dir.path());
    let index = index_for(dir.path(), "/repo/");

    let article = index.resolve("essays/01-tlon").await.unwrap();
    assert_eq!(article.title, "tlon");
    assert_eq!(article.date, "2024-01-01");
    assert!(article.content.contains(r#"href="/repo/article/poem/X/01-a""#));

    let poem = index.resolve("poem%2FX%2F01-a").await.unwrap();
    assert_eq!(poem.title, "a");
    assert!(poem.content.contains("第一首"));
}

#[tokio::test]
async fn resolve_across_unicode_normalization() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "essays/cafe\u{301}.md", "NFD");
    write(dir.path(), "essays/na\u{ef}ve.md", "NFC");
    let index = index_for(dir.path(), "");

    let nfd_stored = index.resolve("essays/caf\u{e9}").await.unwrap();
    assert!(nfd_stored.content.contains("NFD"));

    let nfc_stored = index.resolve("essays/nai\u{308}ve").await.unwrap();
    assert!(nfc_stored.content.contains("NFC"));
}
