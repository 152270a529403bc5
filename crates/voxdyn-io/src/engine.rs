//! Processor chain engine.

use crate::Result;
use voxdyn_core::{BYTES_PER_FRAME, DynamicsProcessor, SampleCodec};

/// Processing engine that runs a chain of processors over PCM byte buffers.
///
/// Processors run in insertion order. State carries over between calls, so
/// feeding a stream in blocks produces the same bytes as feeding it whole.
///
/// The engine uses `Send` bounds so it can be moved to a worker thread.
#[derive(Default)]
pub struct ProcessingEngine {
    processors: Vec<Box<dyn DynamicsProcessor + Send>>,
}

impl ProcessingEngine {
    /// Create an empty engine. An empty engine passes audio through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine from an already built chain.
    pub fn from_processors(processors: Vec<Box<dyn DynamicsProcessor + Send>>) -> Self {
        Self { processors }
    }

    /// Add a processor to the end of the chain.
    pub fn add_processor(&mut self, processor: Box<dyn DynamicsProcessor + Send>) {
        tracing::debug!(
            processor = processor.name(),
            index = self.processors.len(),
            "added processor"
        );
        self.processors.push(processor);
    }

    /// Clear all processors from the chain.
    pub fn clear(&mut self) {
        self.processors.clear();
    }

    /// Get the number of processors in the chain.
    pub fn len(&self) -> usize {
        self.processors.len()
    }

    /// Check if the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Processors in chain order.
    pub fn processors(&self) -> &[Box<dyn DynamicsProcessor + Send>] {
        &self.processors
    }

    /// Process a single frame through the chain.
    pub fn process_frame(&mut self, input: i16) -> i16 {
        let mut sample = input;
        for processor in &mut self.processors {
            sample = processor.process_frame(sample);
        }
        sample
    }

    /// Process a buffer in place. Odd-length buffers are rejected untouched.
    pub fn feed_inplace(&mut self, buffer: &mut [u8]) -> Result<()> {
        SampleCodec::frame_count(buffer.len())?;
        for processor in &mut self.processors {
            processor.feed_inplace(buffer)?;
        }
        Ok(())
    }

    /// Process a buffer, returning a new buffer of identical length.
    pub fn feed(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = input.to_vec();
        self.feed_inplace(&mut output)?;
        Ok(output)
    }

    /// Process a whole stream in blocks of `block_frames` frames.
    ///
    /// A `block_frames` of 0 is treated as 1.
    pub fn process_stream(&mut self, input: &[u8], block_frames: usize) -> Result<Vec<u8>> {
        self.process_stream_with(input, block_frames, |_| {})
    }

    /// Like [`process_stream`](Self::process_stream), calling `on_block` with
    /// the frame count of each finished block.
    pub fn process_stream_with(
        &mut self,
        input: &[u8],
        block_frames: usize,
        mut on_block: impl FnMut(usize),
    ) -> Result<Vec<u8>> {
        let frames = SampleCodec::frame_count(input.len())?;
        let block_bytes = block_frames.max(1) * BYTES_PER_FRAME;
        tracing::debug!(
            frames,
            block_frames,
            processors = self.len(),
            "processing stream"
        );

        let mut output = input.to_vec();
        for block in output.chunks_mut(block_bytes) {
            self.feed_inplace(block)?;
            on_block(block.len() / BYTES_PER_FRAME);
        }
        Ok(output)
    }
}

/// Largest absolute sample value in a PCM buffer (0 for an empty buffer).
pub fn peak_level(pcm: &[u8]) -> Result<u16> {
    Ok(SampleCodec::frames(pcm)?.map(i16::unsigned_abs).max().unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Halve {
        frames: u64,
    }

    impl DynamicsProcessor for Halve {
        fn name(&self) -> &'static str {
            "halve"
        }
        fn process_frame(&mut self, sample: i16) -> i16 {
            self.frames += 1;
            sample / 2
        }
        fn gain(&self) -> f64 {
            0.5
        }
        fn envelope(&self) -> f64 {
            0.0
        }
        fn frame_index(&self) -> u64 {
            self.frames
        }
    }

    #[test]
    fn empty_engine_passes_through() {
        let mut engine = ProcessingEngine::new();
        assert!(engine.is_empty());
        let input = SampleCodec::encode_buffer(&[1, -2, 3]);
        assert_eq!(engine.feed(&input).unwrap(), input);
    }

    #[test]
    fn processors_run_in_order() {
        let mut engine = ProcessingEngine::new();
        engine.add_processor(Box::new(Halve { frames: 0 }));
        engine.add_processor(Box::new(Halve { frames: 0 }));
        assert_eq!(engine.len(), 2);
        assert_eq!(engine.process_frame(1000), 250);
        let out = engine.feed(&SampleCodec::encode_buffer(&[400])).unwrap();
        assert_eq!(SampleCodec::decode_buffer(&out).unwrap(), [100]);
        assert_eq!(engine.processors()[1].frame_index(), 2);
    }

    #[test]
    fn odd_buffer_touches_nothing() {
        let mut engine = ProcessingEngine::new();
        engine.add_processor(Box::new(Halve { frames: 0 }));
        let mut buf = [8u8, 0, 8];
        assert!(engine.feed_inplace(&mut buf).is_err());
        assert_eq!(buf, [8, 0, 8]);
        assert!(engine.process_stream(&buf, 1).is_err());
        assert_eq!(engine.processors()[0].frame_index(), 0);
    }

    #[test]
    fn stream_reports_blocks() {
        let mut engine = ProcessingEngine::new();
        engine.add_processor(Box::new(Halve { frames: 0 }));
        let input = SampleCodec::encode_buffer(&[10; 5]);
        let mut blocks = Vec::new();
        let out = engine
            .process_stream_with(&input, 2, |n| blocks.push(n))
            .unwrap();
        assert_eq!(blocks, [2, 2, 1]);
        assert_eq!(SampleCodec::decode_buffer(&out).unwrap(), [5; 5]);
    }

    #[test]
    fn zero_block_size_still_progresses() {
        let mut engine = ProcessingEngine::new();
        let input = SampleCodec::encode_buffer(&[1, 2, 3]);
        assert_eq!(engine.process_stream(&input, 0).unwrap(), input);
    }

    #[test]
    fn peak_of_extremes() {
        assert_eq!(peak_level(&[]).unwrap(), 0);
        assert_eq!(
            peak_level(&SampleCodec::encode_buffer(&[5, i16::MIN, 7])).unwrap(),
            32768
        );
        assert!(peak_level(&[0]).is_err());
    }
}
