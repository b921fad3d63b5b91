use vizjoin::{
    Attr, AttrMap, BandScale, ChartConfig, ChartInstance, Encoder, Interpolator, LinearScale,
    Millis, Point, SequentialScale, VizjoinResult, extent,
};

#[derive(Clone, Debug)]
struct Episode {
    number: i64,
    words: f64,
}

struct Bars {
    x: BandScale<i64>,
    y: LinearScale,
    fill: SequentialScale,
    baseline: f64,
}

impl Bars {
    fn for_data(data: &[Episode], config: &ChartConfig) -> VizjoinResult<Self> {
        let m = config.margin;
        let max = extent(data, |e| e.words).map_or(1.0, |(_, hi)| hi);
        Ok(Self {
            x: BandScale::new(
                data.iter().map(|e| e.number),
                [m.left, config.width - m.right],
            )?
            .with_padding(0.1)?,
            y: LinearScale::new([0.0, max], [config.height - m.bottom, m.top])?,
            fill: SequentialScale::new([max, 0.0], Interpolator::Inferno)?,
            baseline: config.height - m.bottom,
        })
    }
}

impl Encoder<Episode> for Bars {
    fn enter(&self, r: &Episode, _index: usize) -> VizjoinResult<AttrMap> {
        Ok(AttrMap::new()
            .with(Attr::X, self.x.position(&r.number)?)
            .with(Attr::Width, self.x.bandwidth())
            .with(Attr::Y, self.baseline)
            .with(Attr::Height, 0.0)
            .with(Attr::Fill, self.fill.apply(r.words)))
    }

    fn target(&self, r: &Episode, _index: usize) -> VizjoinResult<AttrMap> {
        let y = self.y.apply(r.words);
        Ok(AttrMap::new()
            .with(Attr::X, self.x.position(&r.number)?)
            .with(Attr::Width, self.x.bandwidth())
            .with(Attr::Y, y)
            .with(Attr::Height, self.baseline - y)
            .with(Attr::Fill, self.fill.apply(r.words)))
    }

    fn exit(&self, _r: &Episode) -> VizjoinResult<AttrMap> {
        Ok(AttrMap::new()
            .with(Attr::Y, self.baseline)
            .with(Attr::Height, 0.0))
    }

    fn tooltip(&self, r: &Episode) -> Vec<String> {
        vec![format!("Episode {}: {} words", r.number, r.words)]
    }
}

fn dump(chart: &ChartInstance<i64, Episode>, at: Millis) {
    println!("t = {} ms", at.0);
    for el in chart.bindings().iter() {
        let a = el.attrs();
        println!(
            "  #{} ep {:>2} {:?}: x={:>6.1} h={:>6.1} fill={}",
            el.id(),
            el.key(),
            el.phase(),
            a.number(&Attr::X).unwrap_or_default(),
            a.number(&Attr::Height).unwrap_or_default(),
            a.color(&Attr::Fill).map(|c| c.to_hex()).unwrap_or_default(),
        );
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = ChartConfig::from_json_str(include_str!("../tests/data/bar_chart.json"))?;
    let mut chart: ChartInstance<i64, Episode> = ChartInstance::new(config)?;
    let key = |e: &Episode| Some(e.number);

    let revisions = [
        vec![
            Episode { number: 1, words: 120.0 },
            Episode { number: 2, words: 210.0 },
            Episode { number: 3, words: 80.0 },
        ],
        vec![
            Episode { number: 2, words: 150.0 },
            Episode { number: 3, words: 240.0 },
            Episode { number: 4, words: 60.0 },
        ],
    ];

    let mut now = Millis::ZERO;
    for data in &revisions {
        let bars = Bars::for_data(data, chart.config())?;
        let report = chart.render(data, key, &bars, now)?;
        println!(
            "render: {} enter, {} update, {} exit",
            report.plan.enter.len(),
            report.plan.update.len(),
            report.plan.exit.len()
        );
        for step in [0.0, 500.0, 1000.0, 2000.0] {
            let at = now.offset(step);
            let frame = chart.tick(at)?;
            if !frame.removed.is_empty() {
                println!("  removed {:?}", frame.removed);
            }
            dump(&chart, at);
        }

        if let Some(first) = report.plan.enter.first().copied() {
            chart.pointer_enter(first, Point::new(100.0, 200.0), now.offset(2000.0))?;
            println!("  tooltip at {:?}: {:?}", chart.tooltip_anchor(), chart.tooltip_lines(&bars));
            chart.pointer_leave(first)?;
        }
        now = now.offset(2000.0);
    }

    chart.teardown();
    Ok(())
}
