use console::Style;
use dropcars_core::api::{Account, AccountStatus, Document, DocumentStatus, Order, Transfer, Wallet};
use dropcars_core::transform::{PanBounds, TransformSnapshot};

struct Styles {
    header: Style,
    label: Style,
    value: Style,
    id: Style,
    good: Style,
    warn: Style,
    bad: Style,
    dim: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            id: Style::new().underlined(),
            good: Style::new().green(),
            warn: Style::new().yellow(),
            bad: Style::new().red(),
            dim: Style::new().dim(),
        }
    }

    fn account_status(&self, status: AccountStatus) -> &Style {
        match status {
            AccountStatus::Active => &self.good,
            AccountStatus::Pending => &self.warn,
            AccountStatus::Blocked | AccountStatus::Inactive => &self.bad,
            AccountStatus::Unknown => &self.dim,
        }
    }

    fn document_status(&self, status: DocumentStatus) -> &Style {
        match status {
            DocumentStatus::Verified => &self.good,
            DocumentStatus::Pending => &self.warn,
            DocumentStatus::Invalid => &self.bad,
            DocumentStatus::Unknown => &self.dim,
        }
    }
}

fn empty(s: &Styles, what: &str) {
    println!("  {}", s.dim.apply_to(format!("No {what}.")));
}

pub fn print_accounts(accounts: &[Account]) {
    let s = Styles::new();
    println!();
    println!("  {}", s.header.apply_to(format!("Accounts ({})", accounts.len())));
    if accounts.is_empty() {
        empty(&s, "accounts");
    }
    for a in accounts {
        println!(
            "  {:<14}{:<28}{:<16}{}",
            s.id.apply_to(&a.id),
            s.value.apply_to(&a.name),
            s.label.apply_to(a.account_type),
            s.account_status(a.status).apply_to(a.status)
        );
        if let Some(ref phone) = a.phone {
            println!("  {:<14}{}", "", s.label.apply_to(phone));
        }
    }
    println!();
}

pub fn print_account(account: &Account) {
    let s = Styles::new();
    println!(
        "  {} {} is now {}",
        s.id.apply_to(&account.id),
        s.value.apply_to(&account.name),
        s.account_status(account.status).apply_to(account.status)
    );
}

pub fn print_documents(documents: &[Document]) {
    let s = Styles::new();
    println!();
    println!("  {}", s.header.apply_to(format!("Documents ({})", documents.len())));
    if documents.is_empty() {
        empty(&s, "documents");
    }
    for d in documents {
        println!(
            "  {:<14}{:<20}{}",
            s.id.apply_to(&d.id),
            s.value.apply_to(&d.document_type),
            s.document_status(d.status).apply_to(d.status)
        );
        println!("  {:<14}{}", "", s.label.apply_to(&d.image_url));
        if let Some(ref reason) = d.reason {
            println!("  {:<14}{}", "", s.bad.apply_to(reason));
        }
    }
    println!();
}

pub fn print_document(document: &Document) {
    let s = Styles::new();
    println!(
        "  Document {} ({}) is now {}",
        s.id.apply_to(&document.id),
        document.document_type,
        s.document_status(document.status).apply_to(document.status)
    );
}

pub fn print_orders(orders: &[Order]) {
    let s = Styles::new();
    println!();
    println!("  {}", s.header.apply_to(format!("Orders ({})", orders.len())));
    if orders.is_empty() {
        empty(&s, "orders");
    }
    for o in orders {
        let fare = o
            .fare
            .map(|f| format!("{f:.2}"))
            .unwrap_or_else(|| "-".into());
        println!(
            "  {:<14}{:<14}{:>10}",
            s.id.apply_to(&o.id),
            s.value.apply_to(&o.status),
            fare
        );
        if let (Some(pickup), Some(drop)) = (&o.pickup, &o.drop) {
            println!("  {:<14}{}", "", s.label.apply_to(format!("{pickup} -> {drop}")));
        }
    }
    println!();
}

pub fn print_transfers(transfers: &[Transfer]) {
    let s = Styles::new();
    println!();
    println!("  {}", s.header.apply_to(format!("Transfers ({})", transfers.len())));
    if transfers.is_empty() {
        empty(&s, "transfers");
    }
    for t in transfers {
        println!(
            "  {:<14}{:<14}{:>12.2}  {}",
            s.id.apply_to(&t.id),
            s.label.apply_to(&t.account_id),
            t.amount,
            s.value.apply_to(t.status)
        );
    }
    println!();
}

pub fn print_wallet(wallet: &Wallet) {
    let s = Styles::new();
    let currency = wallet.currency.as_deref().unwrap_or("INR");
    println!(
        "  {:<14}{}",
        s.label.apply_to("Account"),
        s.id.apply_to(&wallet.account_id)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Balance"),
        s.value.apply_to(format!("{:.2} {currency}", wallet.balance))
    );
}

pub fn print_transform_header() {
    let s = Styles::new();
    println!(
        "  {}",
        s.header.apply_to(format!(
            "{:<4}{:<18}{:>7}{:>10}{:>10}{:>10}{:>10}",
            "#", "event", "scale", "tx", "ty", "max_tx", "max_ty"
        ))
    );
}

pub fn print_transform_row(step: usize, event: &str, snap: &TransformSnapshot, bounds: &PanBounds) {
    let s = Styles::new();
    println!(
        "  {:<4}{:<18}{:>7.3}{:>10.2}{:>10.2}{}",
        step,
        event,
        snap.scale,
        snap.translate_x,
        snap.translate_y,
        s.dim
            .apply_to(format!("{:>10.2}{:>10.2}", bounds.max_x, bounds.max_y))
    );
}
