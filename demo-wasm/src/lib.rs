use spring_lerp::{
    AngleSpring, NoOpStepObserver, PremultSpring, Premult, Spring, Spring2D, SpringConfig,
    SpringGroup, Vec2, VecSpring,
};
use wasm_bindgen::prelude::*;

// ---- Cursor Follow Demo ----

#[wasm_bindgen]
pub struct FollowDemo {
    soft: Spring2D<f32>,
    snappy: Spring2D<f32>,
    soft_factor: f32,
    snappy_factor: f32,
}

#[wasm_bindgen]
impl FollowDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(soft_settle_secs: f32, snappy_settle_secs: f32) -> Result<FollowDemo, JsError> {
        let soft = SpringConfig::from_settle_time(soft_settle_secs, 0.1)
            .map_err(|e| JsError::new(&e.to_string()))?;
        let snappy = SpringConfig::from_settle_time(snappy_settle_secs, 0.1)
            .map_err(|e| JsError::new(&e.to_string()))?;
        let start = Vec2::new(300.0f32, 300.0);
        Ok(FollowDemo {
            soft: VecSpring::at(start),
            snappy: VecSpring::at(start),
            soft_factor: soft.factor(),
            snappy_factor: snappy.factor(),
        })
    }

    pub fn set_target(&mut self, x: f32, y: f32) {
        let t = Vec2::new(x, y);
        self.soft.set_target(t);
        self.snappy.set_target(t);
    }

    pub fn teleport(&mut self, x: f32, y: f32) {
        let p = Vec2::new(x, y);
        self.soft.force_position(p);
        self.snappy.force_position(p);
    }

    pub fn update(&mut self, dt: f32) {
        self.soft.update(self.soft_factor, dt);
        self.snappy.update(self.snappy_factor, dt);
    }

    /// Returns [sx, sy, fx, fy] -- positions of the soft and snappy followers
    pub fn positions(&self) -> Vec<f32> {
        let s = self.soft.position();
        let f = self.snappy.position();
        vec![s.x, s.y, f.x, f.y]
    }
}

// ---- Dial Demo ----

#[wasm_bindgen]
pub struct DialDemo {
    needle: AngleSpring<f32>,
    zoom: Spring<f32>,
    factor: f32,
}

#[wasm_bindgen]
impl DialDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(factor: f32) -> Self {
        DialDemo {
            needle: AngleSpring::new(),
            zoom: Spring::at(1.0),
            factor,
        }
    }

    /// Point the needle at `degrees`; any value is accepted and wrapped.
    pub fn point_at(&mut self, degrees: f32) {
        self.needle.set_target(degrees);
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom.set_target(zoom);
    }

    pub fn update(&mut self, dt: f32) {
        self.needle.update(self.factor, dt);
        self.zoom.update(self.factor, dt);
    }

    /// Returns [needle_degrees, zoom]
    pub fn state(&self) -> Vec<f32> {
        vec![self.needle.position(), self.zoom.position()]
    }
}

// ---- Fixed-Timestep Swarm Demo ----

#[wasm_bindgen]
pub struct SwarmDemo {
    group: SpringGroup<Vec2<f32>>,
    brightness: Vec<PremultSpring<f32>>,
    tick: f32,
    premult: Premult<f32>,
    accumulator: f32,
}

#[wasm_bindgen]
impl SwarmDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(count: usize, factor: f32, tick_hz: f32) -> Self {
        let config = SpringConfig::new().with_factor(factor);
        let tick = 1.0 / tick_hz.max(1.0);
        let mut group = SpringGroup::with_capacity(count);
        let mut brightness = Vec::with_capacity(count);
        for i in 0..count {
            let x = 40.0 + (i % 20) as f32 * 30.0;
            let y = 40.0 + (i / 20) as f32 * 30.0;
            group.add(VecSpring::at(Vec2::new(x, y)));
            brightness.push(PremultSpring::new());
        }
        SwarmDemo {
            group,
            brightness,
            tick,
            premult: config.premult(tick),
            accumulator: 0.0,
        }
    }

    /// Send every spring toward the cursor; the nearest ones light up.
    pub fn attract(&mut self, x: f32, y: f32) {
        let cursor = Vec2::new(x, y);
        for i in 0..self.group.len() {
            let p = self.group.spring(i).position();
            let dx = p.x - x;
            let dy = p.y - y;
            let lit = if dx * dx + dy * dy < 120.0 * 120.0 { 1.0 } else { 0.0 };
            self.brightness[i].set_target(lit);
            self.group.set_target(i, cursor);
        }
    }

    /// Advance in whole fixed ticks, carrying the remainder to the next frame.
    pub fn update(&mut self, dt: f32) {
        self.accumulator += dt;
        while self.accumulator >= self.tick {
            self.group.step_premult(&self.premult, &mut NoOpStepObserver);
            for b in self.brightness.iter_mut() {
                b.update(&self.premult);
            }
            self.accumulator -= self.tick;
        }
    }

    /// Returns flat [x0, y0, b0, x1, y1, b1, ...]
    pub fn state(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.group.len() * 3);
        for (p, b) in self.group.positions().iter().zip(self.brightness.iter()) {
            out.push(p.x);
            out.push(p.y);
            out.push(b.position());
        }
        out
    }

    pub fn count(&self) -> usize {
        self.group.len()
    }
}
