//! HTML fixtures shaped like the pages of the results site

/// A results row: `(data-title, text)` cells.
pub type Row<'a> = Vec<(&'a str, &'a str)>;

/// Builds a race page with the four `h4.header-class` headings the site
/// publishes (the first one is the series banner) and a single results table
#[allow(dead_code)]
pub fn race_page(headings: &[&str], rows: &[Row], triple_crown: bool) -> String {
    let headings: String = headings
        .iter()
        .map(|heading| format!("<h4 class=\"header-class\">{}</h4>\n", heading))
        .collect();
    let marker = if triple_crown {
        "<td data-title=\"M1\">1</td><td data-title=\"M2\">3</td><td data-title=\"M3\">2</td>"
    } else {
        ""
    };

    let header_row = "<tr><th>Pos</th><th>#</th><th>Rider</th><th>Hometown</th><th>Bike</th>\
        <th>Qual</th><th>Holeshot</th><th>Laps Led</th><th>Points</th></tr>";
    let body: String = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            // the marker cells only go into the first row, like the site does
            let extra = if index == 0 { marker } else { "" };
            format!("<tr>{}{}</tr>\n", cells(row), extra)
        })
        .collect();

    page(&format!("{}<table>{}\n{}</table>", headings, header_row, body))
}

/// Builds a points standings page
#[allow(dead_code)]
pub fn standings_page(rows: &[Row]) -> String {
    let mut header_row = String::from("<tr><th>Pos</th><th>#</th><th>Rider</th><th>Hometown</th><th>Total</th>");
    for round in 1..=17 {
        header_row.push_str(&format!("<th>{}</th>", round));
    }
    header_row.push_str("</tr>");

    let body: String = rows
        .iter()
        .map(|row| format!("<tr>{}</tr>\n", cells(row)))
        .collect();

    page(&format!(
        "<h4 class=\"header-class\">Points Standings</h4><table><thead>{}</thead><tbody>{}</tbody></table>",
        header_row, body
    ))
}

#[allow(dead_code)]
pub fn rider<'a>(position: &'a str, number: &'a str, name: &'a str) -> Row<'a> {
    vec![
        ("Position", position),
        ("#", number),
        ("Rider", name),
        ("Hometown", "Murrieta, CA"),
        ("Bike", "Honda CRF450R"),
        ("Qual", "2"),
        ("Holeshot", "Y"),
        ("Laps Led", "12"),
        ("Points", "26"),
    ]
}

#[allow(dead_code)]
pub fn standard_headings() -> Vec<&'static str> {
    vec![
        "Monster Energy AMA Supercross",
        "Anaheim 1",
        "Angel Stadium - Anaheim, CA",
        "Round 1 - January 5, 2019",
    ]
}

fn cells(row: &Row) -> String {
    row.iter()
        .map(|(title, text)| format!("<td data-title=\"{}\">{}</td>", title, text))
        .collect()
}

fn page(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Results</title>
</head>
<body>
{}
</body>
</html>"#,
        body
    )
}
