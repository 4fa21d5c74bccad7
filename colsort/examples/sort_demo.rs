use colsort::ColumnSortBinder;
use colsort::logging::{LevelFilter, init_file};
use tabledom::{Document, Element, to_html};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_file("sort_demo.log", LevelFilter::Debug)?;

    let mut doc = Document::new(inventory());
    let binder = ColumnSortBinder::initialize(&mut doc);
    println!("bound {} headers\n", binder.bindings().len());

    for binding in binder.bindings() {
        doc.click(&binding.header_id)?;
        println!("after sorting by column {}:", binding.index);
        println!("{}", to_html(doc.root()));
    }

    Ok(())
}

fn inventory() -> Element {
    Element::table()
        .attr("class", "inventory")
        .child(Element::thead().child(Element::header_row_of(["Item", "Stock", "Price"])))
        .child(Element::tbody().children([
            Element::row_of(["Widget", "120 units", "$4.50"]),
            Element::row_of(["Gadget", "8 units", "$19.99"]),
            Element::row_of(["Doohickey", "n/a", "$1,250"]),
            Element::row_of(["Bracket", "45 units", "$0.75"]),
        ]))
}
