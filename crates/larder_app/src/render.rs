use larder_core::{AppViewModel, DetailView, MealDetailView, MealId};

pub fn help() {
    println!("Larder meal browser");
    println!("Type to search; commands:");
    println!("  cat <name>   toggle a category filter (Beef, Chicken, Dessert, Pasta, Seafood)");
    println!("  more         show the next page");
    println!("  open <id>    show meal details");
    println!("  back         close the detail view");
    println!("  fav <id>     toggle a favorite");
    println!("  favs         list saved favorites");
    println!("  quit         exit");
}

pub fn view(view: &AppViewModel) {
    match &view.detail {
        DetailView::Closed => list(view),
        DetailView::Loading { id } => println!("Loading meal {}...", id),
        DetailView::Missing { id } => println!("Meal {} not found.", id),
        DetailView::Ready(detail) => self::detail(detail),
    }
}

pub fn favorites(ids: &[MealId], view: &AppViewModel) {
    if ids.is_empty() {
        println!("No favorite meals saved.");
        return;
    }
    println!("Favorites ({}):", ids.len());
    for id in ids {
        match view.items.iter().find(|row| &row.id == id) {
            Some(row) => println!("  {}  {}", id, row.name),
            None => println!("  {}", id),
        }
    }
}

fn list(view: &AppViewModel) {
    let mut header = String::from("Meals");
    if let Some(category) = view.selected_category {
        header.push_str(&format!(" in {}", category));
    } else if !view.query.trim().is_empty() {
        header.push_str(&format!(" matching {:?}", view.query.trim()));
    }

    if view.loading_initial || view.loading_category {
        println!("{}: loading...", header);
        return;
    }

    let more = if view.has_more {
        ", more available"
    } else {
        ""
    };
    println!("{} ({} shown{})", header, view.items.len(), more);
    for row in &view.items {
        let mark = if row.favorite { "*" } else { " " };
        let area = row.area.as_deref().unwrap_or("-");
        println!(" {} {:<6} {}  ({})", mark, row.id, row.name, area);
    }
    if view.loading_more {
        println!("  loading more...");
    }
}

fn detail(detail: &MealDetailView) {
    let mark = if detail.favorite { " *" } else { "" };
    println!("{} [{}]{}", detail.name, detail.id, mark);
    if let Some(category) = &detail.category {
        println!("Category: {}", category);
    }
    if let Some(area) = &detail.area {
        println!("Area: {}", area);
    }
    if let Some(youtube) = detail.youtube.as_deref().filter(|url| !url.is_empty()) {
        println!("Video: {}", youtube);
    }
    if !detail.ingredients.is_empty() {
        println!("Ingredients:");
        for ingredient in &detail.ingredients {
            match &ingredient.measure {
                Some(measure) => println!("  - {} ({})", ingredient.name, measure),
                None => println!("  - {}", ingredient.name),
            }
        }
    }
    if let Some(instructions) = &detail.instructions {
        println!("Instructions:");
        println!("{}", instructions);
    }
}
