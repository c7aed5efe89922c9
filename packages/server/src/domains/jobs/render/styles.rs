/// Card stylesheet shared by every card in the grid
pub const CARD_STYLE: &str = r#"
    .card {
        border: 2px solid #3498db;
        border-radius: 10px;
        padding: 20px;
        margin: 10px;
        background-color: #f4f6f7;
        flex: 1;
        display: flex;
        flex-direction: column;
    }
    .card h3 {
        color: white;
    }
    .card p {
        color: #7f8c8d;
    }
    .card .header {
        border-radius: 10px 10px 0 0;
        padding: 10px;
    }
    .card .footer {
        padding: 10px;
        color: #3498db;
    }
    .card a {
        color: #3498db;
        text-decoration: none;
    }
"#;

/// Page layout: sidebar on the left, card grid filling the rest
pub const LAYOUT_STYLE: &str = r#"
    body {
        margin: 0;
        font-family: "Source Sans Pro", sans-serif;
        color: #31333f;
    }
    .layout {
        display: flex;
        min-height: 100vh;
    }
    .sidebar {
        width: 300px;
        flex-shrink: 0;
        padding: 20px;
        background-color: #f0f2f6;
    }
    .sidebar label {
        display: block;
        margin-top: 12px;
    }
    .sidebar input[type="text"] {
        width: 100%;
        box-sizing: border-box;
        padding: 6px;
    }
    .main {
        flex: 1;
        padding: 20px 40px;
    }
    .row {
        display: flex;
    }
    .column {
        flex: 1;
        min-width: 0;
        display: flex;
    }
    .empty {
        color: #7f8c8d;
    }
"#;

/// Style applied to the posted-ago ticker of very old postings
pub const VERY_OLD_TICKER_STYLE: &str =
    "background-color: #ffcccc; color: #ff3333; border-radius: 20px; padding: 5px 10px;";
