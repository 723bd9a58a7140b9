use crate::flow::FlowRecord;
use crate::flow::filter::FlowFormatter;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

type CompareFn<R> = Rc<dyn Fn(&R, &R, bool) -> Ordering>;
type CellFn<R> = Rc<dyn Fn(&R) -> String>;

/// A display column: a label, a comparator and a cell formatter.
///
/// The comparator receives the `descending` flag and owns both key extraction
/// and tie-breaking. It must not panic for any two records it is given.
pub struct Column<R> {
    id: &'static str,
    label: String,
    compare: CompareFn<R>,
    cell: CellFn<R>,
}

impl<R> Column<R> {
    pub fn new(
        id: &'static str,
        label: impl Into<String>,
        compare: impl Fn(&R, &R, bool) -> Ordering + 'static,
        cell: impl Fn(&R) -> String + 'static,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            compare: Rc::new(compare),
            cell: Rc::new(cell),
        }
    }

    /// Builds a column that orders records by a key, reversing for descending.
    pub fn by_key<K: Ord>(
        id: &'static str,
        label: impl Into<String>,
        key: impl Fn(&R) -> K + 'static,
        cell: impl Fn(&R) -> String + 'static,
    ) -> Self {
        Self::new(
            id,
            label,
            move |a, b, descending| {
                let ord = key(a).cmp(&key(b));
                if descending { ord.reverse() } else { ord }
            },
            cell,
        )
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn compare(&self, a: &R, b: &R, descending: bool) -> Ordering {
        (self.compare)(a, b, descending)
    }

    pub fn cell(&self, record: &R) -> String {
        (self.cell)(record)
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            label: self.label.clone(),
            compare: Rc::clone(&self.compare),
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

pub fn default_columns() -> Vec<Column<FlowRecord>> {
    vec![
        Column::by_key(
            "time",
            "Time",
            |f: &FlowRecord| f.timestamp_ms,
            |f: &FlowRecord| FlowFormatter::timestamp(f.timestamp_ms),
        ),
        Column::by_key(
            "src_ip",
            "Src IP",
            |f: &FlowRecord| f.source.addr,
            |f: &FlowRecord| FlowFormatter::ip_address(&f.source.addr),
        ),
        Column::by_key(
            "src_port",
            "Src Port",
            |f: &FlowRecord| f.source.port,
            |f: &FlowRecord| FlowFormatter::port(f.source.port),
        ),
        Column::by_key(
            "dst_ip",
            "Dst IP",
            |f: &FlowRecord| f.destination.addr,
            |f: &FlowRecord| FlowFormatter::ip_address(&f.destination.addr),
        ),
        Column::by_key(
            "dst_port",
            "Dst Port",
            |f: &FlowRecord| f.destination.port,
            |f: &FlowRecord| FlowFormatter::port(f.destination.port),
        ),
        Column::by_key(
            "protocol",
            "Protocol",
            |f: &FlowRecord| f.protocol,
            |f: &FlowRecord| FlowFormatter::protocol(&f.protocol),
        ),
        Column::by_key(
            "bytes",
            "Bytes",
            |f: &FlowRecord| f.bytes,
            |f: &FlowRecord| FlowFormatter::count(f.bytes),
        ),
        Column::by_key(
            "packets",
            "Packets",
            |f: &FlowRecord| f.packets,
            |f: &FlowRecord| FlowFormatter::count(f.packets),
        ),
    ]
}
